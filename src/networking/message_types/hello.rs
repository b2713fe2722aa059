use std::net::SocketAddr;

use macros::Serializable;

use crate::chain::ChainTypes;
use crate::serialize::Hash256;

use super::peer_list::socket_addr_from_parts;

///
/// Data Object for HELLO, the first command on every connection.
/// - `version` - protocol version of the sender
/// - `network_id` - network the sender is on
/// - `peer_id` - identity of the sender
/// - `peer_ip`, `peer_port` - where the sender accepts connections
/// - `chain_mask_list` - shard affinity of the sender, opaque to this layer
/// - `root_block_header` - the sender's root chain tip
///
/// Peers disconnect on a version or network mismatch, see `is_compatible`.
///
#[derive(Debug, Clone, PartialEq, Serializable)]
pub struct HelloCommand<C: ChainTypes> {
    version: u32,
    network_id: u32,
    peer_id: Hash256,
    peer_ip: u128,
    peer_port: u16,
    chain_mask_list: Vec<u32>,
    root_block_header: C::RootBlockHeader,
}

impl<C: ChainTypes> HelloCommand<C> {
    pub fn new(
        version: u32,
        network_id: u32,
        peer_id: Hash256,
        peer_ip: u128,
        peer_port: u16,
        chain_mask_list: Vec<u32>,
        root_block_header: C::RootBlockHeader,
    ) -> Self {
        HelloCommand {
            version,
            network_id,
            peer_id,
            peer_ip,
            peer_port,
            chain_mask_list,
            root_block_header,
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn network_id(&self) -> u32 {
        self.network_id
    }

    pub fn peer_id(&self) -> &Hash256 {
        &self.peer_id
    }

    pub fn peer_ip(&self) -> u128 {
        self.peer_ip
    }

    pub fn peer_port(&self) -> u16 {
        self.peer_port
    }

    pub fn peer_addr(&self) -> SocketAddr {
        socket_addr_from_parts(self.peer_ip, self.peer_port)
    }

    pub fn chain_mask_list(&self) -> &Vec<u32> {
        &self.chain_mask_list
    }

    pub fn root_block_header(&self) -> &C::RootBlockHeader {
        &self.root_block_header
    }

    /// Whether a node running `version` on `network_id` should keep this peer.
    pub fn is_compatible(&self, version: u32, network_id: u32) -> bool {
        self.version == version && self.network_id == network_id
    }
}
