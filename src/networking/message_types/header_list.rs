use macros::Serializable;

use crate::chain::ChainTypes;
use crate::error::ShardConstraintError;
use crate::serialize::Hash256;

use super::skip_query::{Direction, SkipTraversal};

///
/// Data Object for NEW_MINOR_BLOCK_HEADER_LIST, announcing new root or minor blocks.
///
/// Sent to the root chain, the minor block header list must be empty. Sent to a
/// shard, every header must belong to that shard. The codec does not enforce
/// this; receivers call `check_shard_constraint`.
///
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct NewMinorBlockHeaderListCommand<C: ChainTypes> {
    root_block_header: C::RootBlockHeader,
    minor_block_header_list: Vec<C::MinorBlockHeader>,
}

impl<C: ChainTypes> NewMinorBlockHeaderListCommand<C> {
    pub fn new(
        root_block_header: C::RootBlockHeader,
        minor_block_header_list: Vec<C::MinorBlockHeader>,
    ) -> Self {
        NewMinorBlockHeaderListCommand {
            root_block_header,
            minor_block_header_list,
        }
    }

    pub fn root_block_header(&self) -> &C::RootBlockHeader {
        &self.root_block_header
    }

    pub fn minor_block_header_list(&self) -> &Vec<C::MinorBlockHeader> {
        &self.minor_block_header_list
    }

    /// `target` is `None` for the root chain, or the branch of the receiving shard.
    pub fn check_shard_constraint(
        &self,
        target: Option<&C::Branch>,
    ) -> Result<(), ShardConstraintError> {
        match target {
            None if !self.minor_block_header_list.is_empty() => Err(
                ShardConstraintError::HeadersSentToRoot(self.minor_block_header_list.len()),
            ),
            None => Ok(()),
            Some(branch) => {
                match self
                    .minor_block_header_list
                    .iter()
                    .position(|header| C::minor_header_branch(header) != *branch)
                {
                    Some(index) => Err(ShardConstraintError::ForeignShardHeader { index }),
                    None => Ok(()),
                }
            }
        }
    }
}

///
/// Data Object for GET_ROOT_BLOCK_HEADER_LIST_REQUEST.
///
/// Walks the active root chain from `block_hash`, without skipping. See
/// `GetRootBlockHeaderListWithSkipRequest` for the strided form.
///
#[derive(Debug, Clone, PartialEq, Eq, Serializable)]
pub struct GetRootBlockHeaderListRequest {
    block_hash: Hash256,
    limit: u32,
    direction: Direction,
}

impl GetRootBlockHeaderListRequest {
    pub fn new(block_hash: Hash256, limit: u32, direction: Direction) -> Self {
        GetRootBlockHeaderListRequest {
            block_hash,
            limit,
            direction,
        }
    }

    pub fn block_hash(&self) -> &Hash256 {
        &self.block_hash
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn traversal(&self, start_height: u64, tip_height: u64) -> SkipTraversal {
        SkipTraversal::new(start_height, tip_height, self.limit, 0, self.direction)
    }
}

/// Answer to both root header list requests, with and without skip.
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct GetRootBlockHeaderListResponse<C: ChainTypes> {
    root_tip: C::RootBlockHeader,
    block_header_list: Vec<C::RootBlockHeader>,
}

impl<C: ChainTypes> GetRootBlockHeaderListResponse<C> {
    pub fn new(root_tip: C::RootBlockHeader, block_header_list: Vec<C::RootBlockHeader>) -> Self {
        GetRootBlockHeaderListResponse {
            root_tip,
            block_header_list,
        }
    }

    pub fn root_tip(&self) -> &C::RootBlockHeader {
        &self.root_tip
    }

    pub fn block_header_list(&self) -> &Vec<C::RootBlockHeader> {
        &self.block_header_list
    }
}

///
/// Data Object for GET_MINOR_BLOCK_HEADER_LIST_REQUEST.
/// - `block_hash` - start block on the shard chain
/// - `branch` - the shard
/// - `limit` - most headers the responder may return
/// - `direction` - walk toward genesis or toward the tip
///
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct GetMinorBlockHeaderListRequest<C: ChainTypes> {
    block_hash: Hash256,
    branch: C::Branch,
    limit: u32,
    direction: Direction,
}

impl<C: ChainTypes> GetMinorBlockHeaderListRequest<C> {
    pub fn new(block_hash: Hash256, branch: C::Branch, limit: u32, direction: Direction) -> Self {
        GetMinorBlockHeaderListRequest {
            block_hash,
            branch,
            limit,
            direction,
        }
    }

    pub fn block_hash(&self) -> &Hash256 {
        &self.block_hash
    }

    pub fn branch(&self) -> &C::Branch {
        &self.branch
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn traversal(&self, start_height: u64, tip_height: u64) -> SkipTraversal {
        SkipTraversal::new(start_height, tip_height, self.limit, 0, self.direction)
    }
}

/// Answer to both minor header list requests, with and without skip.
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct GetMinorBlockHeaderListResponse<C: ChainTypes> {
    root_tip: C::RootBlockHeader,
    shard_tip: C::MinorBlockHeader,
    block_header_list: Vec<C::MinorBlockHeader>,
}

impl<C: ChainTypes> GetMinorBlockHeaderListResponse<C> {
    pub fn new(
        root_tip: C::RootBlockHeader,
        shard_tip: C::MinorBlockHeader,
        block_header_list: Vec<C::MinorBlockHeader>,
    ) -> Self {
        GetMinorBlockHeaderListResponse {
            root_tip,
            shard_tip,
            block_header_list,
        }
    }

    pub fn root_tip(&self) -> &C::RootBlockHeader {
        &self.root_tip
    }

    pub fn shard_tip(&self) -> &C::MinorBlockHeader {
        &self.shard_tip
    }

    pub fn block_header_list(&self) -> &Vec<C::MinorBlockHeader> {
        &self.block_header_list
    }
}
