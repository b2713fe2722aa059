use criterion::{criterion_group, criterion_main, Criterion};
use quarkchain_p2p::chain::{ChainTypes, U256};
use quarkchain_p2p::error::SerializeError;
use quarkchain_p2p::networking::command::Command;
use quarkchain_p2p::networking::message_types::header_list::GetRootBlockHeaderListResponse;
use quarkchain_p2p::networking::message_types::skip_query::{
    Direction, GetRootBlockHeaderListWithSkipRequest,
};
use quarkchain_p2p::serialize::{ByteReader, Hash256, Serializable};

#[derive(Debug, Clone, PartialEq)]
struct BenchChain;

// 4-byte height plus a 32-byte parent hash, roughly a tenth of a real header
#[derive(Debug, Clone, PartialEq)]
struct BenchHeader {
    height: u32,
    hash_prev_block: Hash256,
}

impl Serializable for BenchHeader {
    fn serialize_into(&self, out: &mut Vec<u8>) {
        self.height.serialize_into(out);
        self.hash_prev_block.serialize_into(out);
    }

    fn deserialize_from(reader: &mut ByteReader<'_>) -> Result<Self, SerializeError> {
        Ok(BenchHeader {
            height: u32::deserialize_from(reader)?,
            hash_prev_block: Hash256::deserialize_from(reader)?,
        })
    }
}

impl ChainTypes for BenchChain {
    type Branch = u32;
    type RootBlockHeader = BenchHeader;
    type MinorBlockHeader = BenchHeader;
    type RootBlock = BenchHeader;
    type MinorBlock = BenchHeader;
    type TypedTransaction = Vec<u8>;

    fn minor_header_branch(_header: &BenchHeader) -> u32 {
        0
    }
}

fn make_header_list_response(count: u32) -> Command<BenchChain> {
    let headers = (0..count)
        .map(|height| BenchHeader {
            height,
            hash_prev_block: [height as u8; 32],
        })
        .collect();
    Command::GetRootBlockHeaderListResponse(GetRootBlockHeaderListResponse::new(
        BenchHeader {
            height: count,
            hash_prev_block: [0; 32],
        },
        headers,
    ))
}

fn bench_skip_query(c: &mut Criterion) {
    let request = GetRootBlockHeaderListWithSkipRequest::create_for_height(
        U256::from(1_000_000u64),
        500,
        99,
        Direction::Genesis,
    );
    let bytes = request.serialize();

    c.bench_function("skip query serialize", |b| b.iter(|| request.serialize()));
    c.bench_function("skip query deserialize", |b| {
        b.iter(|| GetRootBlockHeaderListWithSkipRequest::deserialize(&bytes).unwrap())
    });
}

fn bench_header_list_response(c: &mut Criterion) {
    let command = make_header_list_response(500);
    let raw = command.serialize();

    c.bench_function("500 header response serialize", |b| {
        b.iter(|| command.serialize())
    });
    c.bench_function("500 header response dispatch", |b| {
        b.iter(|| Command::<BenchChain>::from_raw(&raw).unwrap())
    });
}

criterion_group!(benches, bench_skip_query, bench_header_list_response);
criterion_main!(benches);
