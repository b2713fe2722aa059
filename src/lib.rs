/*!
# QuarkChain P2P Commands

The peer-to-peer command set of a sharded blockchain: one root chain plus many
shard ("minor") chains. Peers exchange opcode-tagged binary commands for the
handshake, peer discovery, transaction and block broadcast, and chain sync.

This crate is the codec and the command catalog. It does no I/O: the transport
hands it an opcode and a payload and gets typed commands back, and the other way
around. Block headers, blocks, transactions and branches are supplied by the
chain core through the `ChainTypes` trait.

# Usage

```rust,ignore
use quarkchain_p2p::chain::U256;
use quarkchain_p2p::networking::command::Command;
use quarkchain_p2p::networking::message_types::skip_query::{
    Direction, GetRootBlockHeaderListWithSkipRequest,
};

// 50 root headers from height 1000 toward the tip, one every 10 blocks
let request = GetRootBlockHeaderListWithSkipRequest::create_for_height(
    U256::from(1000u64), 50, 9, Direction::Tip,
);
let raw = Command::<MyChain>::GetRootBlockHeaderListWithSkipRequest(request).serialize();
transport.send(raw.opcode, raw.payload);

let command = Command::<MyChain>::deserialize(opcode, &payload)?;
```

*/
#[macro_use]
extern crate lazy_static;

pub mod chain;
pub mod error;
pub mod networking;
pub mod serialize;

#[cfg(test)]
mod test_setup;
#[cfg(test)]
pub mod test_utilities;

/// Error type used by the command line tools.
pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
