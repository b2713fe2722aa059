pub mod block_list;
pub mod broadcast;
pub mod header_list;
pub mod hello;
pub mod peer_list;
pub mod ping_pong;
pub mod skip_query;
