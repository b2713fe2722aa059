use macros::Serializable;
use rand::Rng;

use crate::chain::ChainTypes;
use crate::serialize::Hash256;

/// Chain types with small fixed layouts, standing in for the chain core in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct MockChain;

#[derive(Debug, Clone, Copy, PartialEq, Serializable)]
pub struct MockBranch {
    pub value: u32,
}

impl MockBranch {
    pub fn shard(value: u32) -> Self {
        MockBranch { value }
    }
}

#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct MockRootBlockHeader {
    pub version: u32,
    pub height: u32,
    pub hash_prev_block: Hash256,
    pub create_time: u64,
    pub nonce: u64,
}

#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct MockMinorBlockHeader {
    pub version: u32,
    pub branch: MockBranch,
    pub height: u64,
    pub hash_prev_minor_block: Hash256,
    pub create_time: u64,
}

#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct MockTransaction {
    pub nonce: u64,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct MockRootBlock {
    pub header: MockRootBlockHeader,
    pub minor_block_header_list: Vec<MockMinorBlockHeader>,
}

#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct MockMinorBlock {
    pub header: MockMinorBlockHeader,
    pub tx_list: Vec<MockTransaction>,
}

impl ChainTypes for MockChain {
    type Branch = MockBranch;
    type RootBlockHeader = MockRootBlockHeader;
    type MinorBlockHeader = MockMinorBlockHeader;
    type RootBlock = MockRootBlock;
    type MinorBlock = MockMinorBlock;
    type TypedTransaction = MockTransaction;

    fn minor_header_branch(header: &MockMinorBlockHeader) -> MockBranch {
        header.branch
    }
}

/// Encoded size of a `MockRootBlockHeader`.
pub const MOCK_ROOT_HEADER_SIZE: usize = 4 + 4 + 32 + 8 + 8;

pub fn make_mock_root_header(height: u32) -> MockRootBlockHeader {
    MockRootBlockHeader {
        version: 0,
        height,
        hash_prev_block: [height as u8; 32],
        create_time: 1_519_147_489 + height as u64 * 10,
        nonce: 0,
    }
}

pub fn make_mock_minor_header(shard: u32, height: u64) -> MockMinorBlockHeader {
    MockMinorBlockHeader {
        version: 0,
        branch: MockBranch::shard(shard),
        height,
        hash_prev_minor_block: [shard as u8; 32],
        create_time: 1_519_147_489 + height * 10,
    }
}

pub fn make_random_root_header<R: Rng>(rng: &mut R) -> MockRootBlockHeader {
    MockRootBlockHeader {
        version: rng.gen(),
        height: rng.gen(),
        hash_prev_block: rng.gen(),
        create_time: rng.gen(),
        nonce: rng.gen(),
    }
}

pub fn make_random_minor_header<R: Rng>(rng: &mut R) -> MockMinorBlockHeader {
    MockMinorBlockHeader {
        version: rng.gen(),
        branch: MockBranch::shard(rng.gen_range(0..8)),
        height: rng.gen(),
        hash_prev_minor_block: rng.gen(),
        create_time: rng.gen(),
    }
}

pub fn make_random_transaction<R: Rng>(rng: &mut R) -> MockTransaction {
    let len = rng.gen_range(0..64);
    MockTransaction {
        nonce: rng.gen(),
        data: (0..len).map(|_| rng.gen()).collect(),
    }
}

pub fn make_random_root_block<R: Rng>(rng: &mut R) -> MockRootBlock {
    let count = rng.gen_range(0..5);
    MockRootBlock {
        header: make_random_root_header(rng),
        minor_block_header_list: (0..count).map(|_| make_random_minor_header(rng)).collect(),
    }
}

pub fn make_random_minor_block<R: Rng>(rng: &mut R) -> MockMinorBlock {
    let count = rng.gen_range(0..5);
    MockMinorBlock {
        header: make_random_minor_header(rng),
        tx_list: (0..count).map(|_| make_random_transaction(rng)).collect(),
    }
}
