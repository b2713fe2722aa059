use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use macros::Serializable;

// Peers store an IPv4 address as its plain 32-bit integer value in the 128-bit
// field, so anything that fits in 32 bits reads back as IPv4.
pub(crate) fn socket_addr_from_parts(ip: u128, port: u16) -> SocketAddr {
    let ip = if ip <= u32::MAX as u128 {
        IpAddr::V4(Ipv4Addr::from(ip as u32))
    } else {
        IpAddr::V6(Ipv6Addr::from(ip))
    };
    SocketAddr::new(ip, port)
}

/// Data Object for GET_PEER_LIST_REQUEST. The responder returns at most `max_peers` entries.
#[derive(Debug, Clone, PartialEq, Eq, Serializable)]
pub struct GetPeerListRequest {
    max_peers: u32,
}

impl GetPeerListRequest {
    pub fn new(max_peers: u32) -> Self {
        GetPeerListRequest { max_peers }
    }

    pub fn max_peers(&self) -> u32 {
        self.max_peers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serializable)]
pub struct PeerInfo {
    ip: u128,
    port: u16,
}

impl PeerInfo {
    pub fn new(ip: u128, port: u16) -> Self {
        PeerInfo { ip, port }
    }

    pub fn ip(&self) -> u128 {
        self.ip
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn socket_addr(&self) -> SocketAddr {
        socket_addr_from_parts(self.ip, self.port)
    }
}

impl From<SocketAddr> for PeerInfo {
    fn from(addr: SocketAddr) -> Self {
        let ip = match addr.ip() {
            IpAddr::V4(ip) => u32::from(ip) as u128,
            IpAddr::V6(ip) => u128::from(ip),
        };
        PeerInfo::new(ip, addr.port())
    }
}

/// Data Object for GET_PEER_LIST_RESPONSE.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serializable)]
pub struct GetPeerListResponse {
    peer_info_list: Vec<PeerInfo>,
}

impl GetPeerListResponse {
    pub fn new(peer_info_list: Vec<PeerInfo>) -> Self {
        GetPeerListResponse { peer_info_list }
    }

    pub fn peer_info_list(&self) -> &Vec<PeerInfo> {
        &self.peer_info_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SerializeError;
    use crate::serialize::Serializable;

    #[test]
    fn test_peer_info_socket_addr() {
        let v4: SocketAddr = "127.0.0.1:38291".parse().unwrap();
        let info = PeerInfo::from(v4);
        assert_eq!(info.ip(), 0x7f00_0001);
        assert_eq!(info.socket_addr(), v4);

        let v6: SocketAddr = "[2001:db8::1]:38291".parse().unwrap();
        let info = PeerInfo::from(v6);
        assert_eq!(info.socket_addr(), v6);
    }

    #[test]
    fn test_get_peer_list_serialize() {
        let request = GetPeerListRequest::new(25);
        assert_eq!(request.serialize(), vec![0, 0, 0, 25]);
        assert_eq!(GetPeerListRequest::deserialize(&[0, 0, 0, 25]), Ok(request));

        let response = GetPeerListResponse::new(vec![
            PeerInfo::new(0x7f00_0001, 38291),
            PeerInfo::new(u128::MAX, 1),
        ]);
        let bytes = response.serialize();
        assert_eq!(bytes.len(), 4 + 2 * (16 + 2));
        let deserialized = GetPeerListResponse::deserialize(&bytes).unwrap();
        assert_eq!(deserialized.peer_info_list().len(), 2);
        assert_eq!(deserialized, response);
    }

    #[test]
    fn test_peer_list_declared_count_too_large() {
        let mut bytes = GetPeerListResponse::new(vec![PeerInfo::new(1, 2)]).serialize();
        bytes[3] = 2;
        assert!(matches!(
            GetPeerListResponse::deserialize(&bytes),
            Err(SerializeError::TruncatedInput { offset: 22, .. })
        ));
    }
}
