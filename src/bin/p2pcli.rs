/*!
# P2P Command Line Interface

A binary for building and inspecting p2p command payloads by hand, e.g. when
debugging a sync session against a peer.

## Usage

```bash
p2pcli help [subcommand]
```

## Available subcommands

**opcodes**

prints the command catalog

**skip-query**

builds a GET_ROOT_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST payload

**decode-skip-query**

decodes a GET_ROOT_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST payload

**ping**

builds a PING payload

## Configuration

Defaults for `skip-query` come from `p2pcli.toml` (or the file passed with
`--config`) and `P2PCLI_*` environment variables:

```toml
limit = 100
skip = 0
direction = "genesis"
```

## Example

```bash
p2pcli skip-query --height 1000 --limit 50 --skip 9 --direction tip
```
or
```bash
cargo run --bin p2pcli -- decode-skip-query 01000000000000000000000000000000000000000000000000000000000003e800000032000000090100
```
*/
use std::convert::TryInto;

use clap::{App, Arg, ArgMatches};
use quarkchain_p2p::chain::U256;
use quarkchain_p2p::networking::command_op::{catalog, opcode_for, CommandOp};
use quarkchain_p2p::networking::message_types::ping_pong::PingPongCommand;
use quarkchain_p2p::networking::message_types::skip_query::{
    BlockAddress, Direction, GetRootBlockHeaderListWithSkipRequest,
};
use quarkchain_p2p::serialize::{Hash256, Serializable};
use serde::Deserialize;
use tracing::{event, Level};

#[derive(Debug, Deserialize)]
struct CliSettings {
    limit: u32,
    skip: u32,
    direction: String,
}

fn load_settings(config_name: &str) -> quarkchain_p2p::Result<CliSettings> {
    let mut settings = config::Config::default();
    settings.set_default("limit", 100i64)?;
    settings.set_default("skip", 0i64)?;
    settings.set_default("direction", "genesis")?;
    settings.merge(config::File::with_name(config_name).required(false))?;
    settings.merge(config::Environment::with_prefix("P2PCLI"))?;
    Ok(settings.try_into()?)
}

fn parse_direction(value: &str) -> quarkchain_p2p::Result<Direction> {
    match value {
        "genesis" | "0" => Ok(Direction::Genesis),
        "tip" | "1" => Ok(Direction::Tip),
        other => Err(format!("direction must be genesis or tip, got {}", other).into()),
    }
}

fn parse_hash(value: &str) -> quarkchain_p2p::Result<Hash256> {
    let bytes = hex::decode(value)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| format!("expected 32 bytes of hex, got {}", bytes.len()).into())
}

fn parse_u32(matches: &ArgMatches, name: &str, default: u32) -> quarkchain_p2p::Result<u32> {
    match matches.value_of(name) {
        Some(value) => Ok(value.parse()?),
        None => Ok(default),
    }
}

fn print_payload(op: CommandOp, payload: &[u8]) {
    println!("opcode  : {}", opcode_for(op));
    println!("payload : {}", hex::encode(payload));
}

fn skip_query(matches: &ArgMatches, settings: &CliSettings) -> quarkchain_p2p::Result<()> {
    let limit = parse_u32(matches, "limit", settings.limit)?;
    let skip = parse_u32(matches, "skip", settings.skip)?;
    let direction = parse_direction(matches.value_of("direction").unwrap_or(&settings.direction))?;
    let request = if let Some(height) = matches.value_of("height") {
        let height: u64 = height.parse()?;
        GetRootBlockHeaderListWithSkipRequest::create_for_height(
            U256::from(height),
            limit,
            skip,
            direction,
        )
    } else if let Some(hash) = matches.value_of("hash") {
        GetRootBlockHeaderListWithSkipRequest::create_for_hash(
            parse_hash(hash)?,
            limit,
            skip,
            direction,
        )
    } else {
        return Err("either --height or --hash is required".into());
    };
    event!(Level::DEBUG, ?request, "built skip query");
    print_payload(
        CommandOp::GetRootBlockHeaderListWithSkipRequest,
        &request.serialize(),
    );
    Ok(())
}

fn decode_skip_query(matches: &ArgMatches) -> quarkchain_p2p::Result<()> {
    let payload = hex::decode(matches.value_of("payload").unwrap_or_default())?;
    let request = GetRootBlockHeaderListWithSkipRequest::deserialize(&payload)?;
    match request.address() {
        BlockAddress::Hash(hash) => println!("hash      : {}", hex::encode(hash)),
        BlockAddress::Height(height) => println!("height    : {:?}", height),
    }
    println!("limit     : {}", request.limit());
    println!("skip      : {}", request.skip());
    println!("direction : {:?}", request.direction());
    Ok(())
}

pub fn main() -> quarkchain_p2p::Result<()> {
    tracing_subscriber::fmt::init();

    let command_matches = App::new("QuarkChain P2P Command Line Interface")
        .about("Build and inspect p2p command payloads")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("config file name"),
        )
        .subcommand(App::new("opcodes").about("prints the command catalog"))
        .subcommand(
            App::new("skip-query")
                .about("builds a root header query with skip")
                .arg(
                    Arg::with_name("height")
                        .long("height")
                        .takes_value(true)
                        .conflicts_with("hash")
                        .help("start block height"),
                )
                .arg(
                    Arg::with_name("hash")
                        .long("hash")
                        .takes_value(true)
                        .help("start block hash, hex encoded"),
                )
                .arg(
                    Arg::with_name("limit")
                        .short("l")
                        .long("limit")
                        .takes_value(true)
                        .help("most headers to return"),
                )
                .arg(
                    Arg::with_name("skip")
                        .short("s")
                        .long("skip")
                        .takes_value(true)
                        .help("blocks to leave out between headers"),
                )
                .arg(
                    Arg::with_name("direction")
                        .short("d")
                        .long("direction")
                        .takes_value(true)
                        .possible_values(&["genesis", "tip"])
                        .help("walk toward genesis or tip"),
                ),
        )
        .subcommand(
            App::new("decode-skip-query")
                .about("decodes a root header query with skip")
                .arg(
                    Arg::with_name("payload")
                        .required(true)
                        .help("payload, hex encoded"),
                ),
        )
        .subcommand(
            App::new("ping").about("builds a ping payload").arg(
                Arg::with_name("message")
                    .required(true)
                    .help("32 byte message, hex encoded"),
            ),
        )
        .get_matches();

    let config_name = command_matches.value_of("config").unwrap_or("p2pcli");
    let settings = load_settings(config_name)?;

    if command_matches.subcommand_matches("opcodes").is_some() {
        for spec in catalog() {
            println!("{:>3}  {:<48}{}", opcode_for(spec.op), spec.name, spec.payload);
        }
    }
    if let Some(matches) = command_matches.subcommand_matches("skip-query") {
        skip_query(matches, &settings)?;
    }
    if let Some(matches) = command_matches.subcommand_matches("decode-skip-query") {
        decode_skip_query(matches)?;
    }
    if let Some(matches) = command_matches.subcommand_matches("ping") {
        let message = parse_hash(matches.value_of("message").unwrap_or_default())?;
        print_payload(CommandOp::Ping, &PingPongCommand::new(message).serialize());
    }
    Ok(())
}
