use std::convert::TryFrom;

use macros::{Serializable, TryFromByte};

use crate::chain::{ChainTypes, U256};
use crate::error::SerializeError;
use crate::serialize::{ByteReader, Hash256, Serializable};

/// Which way a header query walks from its start block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromByte)]
#[repr(u8)]
pub enum Direction {
    /// Toward decreasing height.
    Genesis = 0,
    /// Toward increasing height.
    Tip = 1,
}

impl Serializable for Direction {
    fn serialize_into(&self, out: &mut Vec<u8>) {
        out.push(*self as u8);
    }

    fn deserialize_from(reader: &mut ByteReader<'_>) -> Result<Self, SerializeError> {
        let offset = reader.offset();
        let value = u8::deserialize_from(reader)?;
        Direction::try_from(value).map_err(|_| SerializeError::InvalidValue {
            field: "direction",
            value,
            offset,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromByte)]
#[repr(u8)]
enum AddressType {
    Hash = 0,
    Height = 1,
}

/// Start block of a skip query, named either by hash or by height.
///
/// On the wire both forms occupy the same slot:
///
/// ```bytes
/// 0       type (0 = hash, 1 = height)
/// 1-32    hash, or height as a 256-bit big-endian integer
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAddress {
    Hash(Hash256),
    Height(U256),
}

impl Serializable for BlockAddress {
    fn serialize_into(&self, out: &mut Vec<u8>) {
        match self {
            BlockAddress::Hash(hash) => {
                out.push(AddressType::Hash as u8);
                out.extend(hash);
            }
            BlockAddress::Height(height) => {
                let mut data: Hash256 = [0; 32];
                height.to_big_endian(&mut data);
                out.push(AddressType::Height as u8);
                out.extend(&data);
            }
        }
    }

    fn deserialize_from(reader: &mut ByteReader<'_>) -> Result<Self, SerializeError> {
        let offset = reader.offset();
        let value = u8::deserialize_from(reader)?;
        let address_type =
            AddressType::try_from(value).map_err(|_| SerializeError::InvalidValue {
                field: "address type",
                value,
                offset,
            })?;
        let data = Hash256::deserialize_from(reader)?;
        Ok(match address_type {
            AddressType::Hash => BlockAddress::Hash(data),
            AddressType::Height => BlockAddress::Height(U256::from_big_endian(&data)),
        })
    }
}

impl BlockAddress {
    /// Panics if the address is a hash.
    pub fn height(&self) -> U256 {
        match self {
            BlockAddress::Height(height) => *height,
            BlockAddress::Hash(_) => {
                panic!("skip query addressed by hash was read as a height")
            }
        }
    }

    /// Panics if the address is a height.
    pub fn hash(&self) -> Hash256 {
        match self {
            BlockAddress::Hash(hash) => *hash,
            BlockAddress::Height(_) => {
                panic!("skip query addressed by height was read as a hash")
            }
        }
    }
}

///
/// Data Object for GET_ROOT_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST.
/// - `address` - start block, by hash or by height
/// - `limit` - most headers the responder may return
/// - `skip` - blocks left out between two returned headers
/// - `direction` - walk toward genesis or toward the tip
///
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct GetRootBlockHeaderListWithSkipRequest {
    address: BlockAddress,
    limit: u32,
    skip: u32,
    direction: Direction,
}

impl GetRootBlockHeaderListWithSkipRequest {
    pub fn create_for_height(height: U256, limit: u32, skip: u32, direction: Direction) -> Self {
        GetRootBlockHeaderListWithSkipRequest {
            address: BlockAddress::Height(height),
            limit,
            skip,
            direction,
        }
    }

    pub fn create_for_hash(hash: Hash256, limit: u32, skip: u32, direction: Direction) -> Self {
        GetRootBlockHeaderListWithSkipRequest {
            address: BlockAddress::Hash(hash),
            limit,
            skip,
            direction,
        }
    }

    pub fn address(&self) -> &BlockAddress {
        &self.address
    }

    /// Start height. Calling this on a hash-addressed request is a bug and panics.
    pub fn get_height(&self) -> U256 {
        self.address.height()
    }

    /// Start hash. Calling this on a height-addressed request is a bug and panics.
    pub fn get_hash(&self) -> Hash256 {
        self.address.hash()
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn skip(&self) -> u32 {
        self.skip
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Heights to answer with, once the start block has been resolved locally.
    pub fn traversal(&self, start_height: u64, tip_height: u64) -> SkipTraversal {
        SkipTraversal::new(start_height, tip_height, self.limit, self.skip, self.direction)
    }
}

///
/// Data Object for GET_MINOR_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST.
///
/// Same as the root query plus the `branch` of the shard being walked; height
/// and hash alone do not say which shard chain is meant.
///
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct GetMinorBlockHeaderListWithSkipRequest<C: ChainTypes> {
    address: BlockAddress,
    branch: C::Branch,
    limit: u32,
    skip: u32,
    direction: Direction,
}

impl<C: ChainTypes> GetMinorBlockHeaderListWithSkipRequest<C> {
    pub fn create_for_height(
        height: U256,
        branch: C::Branch,
        limit: u32,
        skip: u32,
        direction: Direction,
    ) -> Self {
        GetMinorBlockHeaderListWithSkipRequest {
            address: BlockAddress::Height(height),
            branch,
            limit,
            skip,
            direction,
        }
    }

    pub fn create_for_hash(
        hash: Hash256,
        branch: C::Branch,
        limit: u32,
        skip: u32,
        direction: Direction,
    ) -> Self {
        GetMinorBlockHeaderListWithSkipRequest {
            address: BlockAddress::Hash(hash),
            branch,
            limit,
            skip,
            direction,
        }
    }

    pub fn address(&self) -> &BlockAddress {
        &self.address
    }

    /// Start height. Calling this on a hash-addressed request is a bug and panics.
    pub fn get_height(&self) -> U256 {
        self.address.height()
    }

    /// Start hash. Calling this on a height-addressed request is a bug and panics.
    pub fn get_hash(&self) -> Hash256 {
        self.address.hash()
    }

    pub fn branch(&self) -> &C::Branch {
        &self.branch
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn skip(&self) -> u32 {
        self.skip
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn traversal(&self, start_height: u64, tip_height: u64) -> SkipTraversal {
        SkipTraversal::new(start_height, tip_height, self.limit, self.skip, self.direction)
    }
}

/// The heights a responder visits for a skip query.
///
/// Yields `start`, then every `skip + 1`-th height in `direction`, at most
/// `limit` times, stopping before genesis or past `tip_height`. A start above
/// the tip yields nothing.
#[derive(Debug, Clone)]
pub struct SkipTraversal {
    next: Option<u64>,
    remaining: u32,
    stride: u64,
    direction: Direction,
    tip_height: u64,
}

impl SkipTraversal {
    pub fn new(start: u64, tip_height: u64, limit: u32, skip: u32, direction: Direction) -> Self {
        SkipTraversal {
            next: Some(start).filter(|height| *height <= tip_height),
            remaining: limit,
            stride: skip as u64 + 1,
            direction,
            tip_height,
        }
    }
}

impl Iterator for SkipTraversal {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let height = self.next?;
        self.remaining -= 1;
        self.next = match self.direction {
            Direction::Genesis => height.checked_sub(self.stride),
            Direction::Tip => height
                .checked_add(self.stride)
                .filter(|next| *next <= self.tip_height),
        };
        Some(height)
    }
}
