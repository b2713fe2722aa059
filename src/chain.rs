use std::fmt::Debug;

use crate::serialize::Serializable;

pub use bigint::uint::U256;

/// The chain objects carried inside protocol messages.
///
/// Their byte layouts belong to the chain core, not to the p2p layer: a
/// message only needs each of them to encode and decode itself. Implement
/// this for the node's concrete block, header, branch and transaction types.
pub trait ChainTypes: Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Identifies the root chain or one shard.
    type Branch: Serializable + Debug + Clone + PartialEq + Send + Sync;
    type RootBlockHeader: Serializable + Debug + Clone + PartialEq + Send + Sync;
    type MinorBlockHeader: Serializable + Debug + Clone + PartialEq + Send + Sync;
    type RootBlock: Serializable + Debug + Clone + PartialEq + Send + Sync;
    type MinorBlock: Serializable + Debug + Clone + PartialEq + Send + Sync;
    type TypedTransaction: Serializable + Debug + Clone + PartialEq + Send + Sync;

    /// The shard a minor block header was produced on.
    fn minor_header_branch(header: &Self::MinorBlockHeader) -> Self::Branch;
}
