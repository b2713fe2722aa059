use macros::Serializable;

use crate::chain::ChainTypes;
use crate::serialize::Hash256;

/// Data Object for GET_ROOT_BLOCK_LIST_REQUEST. Only sent by the root chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serializable)]
pub struct GetRootBlockListRequest {
    root_block_hash_list: Vec<Hash256>,
}

impl GetRootBlockListRequest {
    pub fn new(root_block_hash_list: Vec<Hash256>) -> Self {
        GetRootBlockListRequest {
            root_block_hash_list,
        }
    }

    pub fn root_block_hash_list(&self) -> &Vec<Hash256> {
        &self.root_block_hash_list
    }
}

#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct GetRootBlockListResponse<C: ChainTypes> {
    root_block_list: Vec<C::RootBlock>,
}

impl<C: ChainTypes> GetRootBlockListResponse<C> {
    pub fn new(root_block_list: Vec<C::RootBlock>) -> Self {
        GetRootBlockListResponse { root_block_list }
    }

    pub fn root_block_list(&self) -> &Vec<C::RootBlock> {
        &self.root_block_list
    }
}

impl<C: ChainTypes> Default for GetRootBlockListResponse<C> {
    fn default() -> Self {
        GetRootBlockListResponse::new(vec![])
    }
}

/// Data Object for GET_MINOR_BLOCK_LIST_REQUEST. Only sent by a shard, and
/// every hash names a block of that shard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serializable)]
pub struct GetMinorBlockListRequest {
    minor_block_hash_list: Vec<Hash256>,
}

impl GetMinorBlockListRequest {
    pub fn new(minor_block_hash_list: Vec<Hash256>) -> Self {
        GetMinorBlockListRequest {
            minor_block_hash_list,
        }
    }

    pub fn minor_block_hash_list(&self) -> &Vec<Hash256> {
        &self.minor_block_hash_list
    }
}

#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct GetMinorBlockListResponse<C: ChainTypes> {
    minor_block_list: Vec<C::MinorBlock>,
}

impl<C: ChainTypes> GetMinorBlockListResponse<C> {
    pub fn new(minor_block_list: Vec<C::MinorBlock>) -> Self {
        GetMinorBlockListResponse { minor_block_list }
    }

    pub fn minor_block_list(&self) -> &Vec<C::MinorBlock> {
        &self.minor_block_list
    }
}

impl<C: ChainTypes> Default for GetMinorBlockListResponse<C> {
    fn default() -> Self {
        GetMinorBlockListResponse::new(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::Serializable;
    use crate::test_utilities::mocks::{make_random_minor_block, make_random_root_block, MockChain};
    use crate::test_utilities::seeded_rng;

    #[test]
    fn test_block_list_requests_serialize() {
        let request = GetRootBlockListRequest::new(vec![[1; 32], [2; 32]]);
        let bytes = request.serialize();
        assert_eq!(bytes.len(), 4 + 64);
        assert_eq!(GetRootBlockListRequest::deserialize(&bytes), Ok(request));

        assert_eq!(GetMinorBlockListRequest::default().serialize(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_block_list_responses_serialize() {
        let mut rng = seeded_rng(7);
        let root = GetRootBlockListResponse::<MockChain>::new(
            (0..4).map(|_| make_random_root_block(&mut rng)).collect(),
        );
        assert_eq!(
            GetRootBlockListResponse::<MockChain>::deserialize(&root.serialize()),
            Ok(root)
        );

        let minor = GetMinorBlockListResponse::<MockChain>::new(
            (0..4).map(|_| make_random_minor_block(&mut rng)).collect(),
        );
        let deserialized =
            GetMinorBlockListResponse::<MockChain>::deserialize(&minor.serialize()).unwrap();
        assert_eq!(deserialized.minor_block_list().len(), 4);
        assert_eq!(deserialized, minor);
    }
}
