use std::collections::HashMap;

/// Wire opcodes. These values are a stable protocol contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommandOp {
    Hello = 0,
    NewMinorBlockHeaderList = 1,
    NewTransactionList = 2,
    // only handled by simple-network peers
    GetPeerListRequest = 3,
    GetPeerListResponse = 4,
    GetRootBlockHeaderListRequest = 5,
    GetRootBlockHeaderListResponse = 6,
    GetRootBlockListRequest = 7,
    GetRootBlockListResponse = 8,
    GetMinorBlockListRequest = 9,
    GetMinorBlockListResponse = 10,
    GetMinorBlockHeaderListRequest = 11,
    GetMinorBlockHeaderListResponse = 12,
    NewBlockMinor = 13,
    Ping = 14,
    Pong = 15,
    GetRootBlockHeaderListWithSkipRequest = 16,
    GetRootBlockHeaderListWithSkipResponse = 17,
    NewRootBlock = 18,
    GetMinorBlockHeaderListWithSkipRequest = 19,
    GetMinorBlockHeaderListWithSkipResponse = 20,
}

/// One catalog entry: an opcode and the payload schema it decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub op: CommandOp,
    /// Protocol name of the command, e.g. `GET_PEER_LIST_REQUEST`.
    pub name: &'static str,
    /// Payload type in `networking::message_types`.
    pub payload: &'static str,
}

static COMMAND_SPECS: [CommandSpec; 21] = [
    spec(CommandOp::Hello, "HELLO", "HelloCommand"),
    spec(
        CommandOp::NewMinorBlockHeaderList,
        "NEW_MINOR_BLOCK_HEADER_LIST",
        "NewMinorBlockHeaderListCommand",
    ),
    spec(
        CommandOp::NewTransactionList,
        "NEW_TRANSACTION_LIST",
        "NewTransactionListCommand",
    ),
    spec(
        CommandOp::GetPeerListRequest,
        "GET_PEER_LIST_REQUEST",
        "GetPeerListRequest",
    ),
    spec(
        CommandOp::GetPeerListResponse,
        "GET_PEER_LIST_RESPONSE",
        "GetPeerListResponse",
    ),
    spec(
        CommandOp::GetRootBlockHeaderListRequest,
        "GET_ROOT_BLOCK_HEADER_LIST_REQUEST",
        "GetRootBlockHeaderListRequest",
    ),
    spec(
        CommandOp::GetRootBlockHeaderListResponse,
        "GET_ROOT_BLOCK_HEADER_LIST_RESPONSE",
        "GetRootBlockHeaderListResponse",
    ),
    spec(
        CommandOp::GetRootBlockListRequest,
        "GET_ROOT_BLOCK_LIST_REQUEST",
        "GetRootBlockListRequest",
    ),
    spec(
        CommandOp::GetRootBlockListResponse,
        "GET_ROOT_BLOCK_LIST_RESPONSE",
        "GetRootBlockListResponse",
    ),
    spec(
        CommandOp::GetMinorBlockListRequest,
        "GET_MINOR_BLOCK_LIST_REQUEST",
        "GetMinorBlockListRequest",
    ),
    spec(
        CommandOp::GetMinorBlockListResponse,
        "GET_MINOR_BLOCK_LIST_RESPONSE",
        "GetMinorBlockListResponse",
    ),
    spec(
        CommandOp::GetMinorBlockHeaderListRequest,
        "GET_MINOR_BLOCK_HEADER_LIST_REQUEST",
        "GetMinorBlockHeaderListRequest",
    ),
    spec(
        CommandOp::GetMinorBlockHeaderListResponse,
        "GET_MINOR_BLOCK_HEADER_LIST_RESPONSE",
        "GetMinorBlockHeaderListResponse",
    ),
    spec(
        CommandOp::NewBlockMinor,
        "NEW_BLOCK_MINOR",
        "NewBlockMinorCommand",
    ),
    spec(CommandOp::Ping, "PING", "PingPongCommand"),
    spec(CommandOp::Pong, "PONG", "PingPongCommand"),
    spec(
        CommandOp::GetRootBlockHeaderListWithSkipRequest,
        "GET_ROOT_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST",
        "GetRootBlockHeaderListWithSkipRequest",
    ),
    spec(
        CommandOp::GetRootBlockHeaderListWithSkipResponse,
        "GET_ROOT_BLOCK_HEADER_LIST_WITH_SKIP_RESPONSE",
        "GetRootBlockHeaderListResponse",
    ),
    spec(CommandOp::NewRootBlock, "NEW_ROOT_BLOCK", "NewRootBlockCommand"),
    spec(
        CommandOp::GetMinorBlockHeaderListWithSkipRequest,
        "GET_MINOR_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST",
        "GetMinorBlockHeaderListWithSkipRequest",
    ),
    spec(
        CommandOp::GetMinorBlockHeaderListWithSkipResponse,
        "GET_MINOR_BLOCK_HEADER_LIST_WITH_SKIP_RESPONSE",
        "GetMinorBlockHeaderListResponse",
    ),
];

const fn spec(op: CommandOp, name: &'static str, payload: &'static str) -> CommandSpec {
    CommandSpec { op, name, payload }
}

lazy_static! {
    // Built once on first use and read-only afterwards; every connection task
    // shares it without locking.
    static ref COMMAND_CATALOG: HashMap<u8, &'static CommandSpec> = COMMAND_SPECS
        .iter()
        .map(|spec| (spec.op as u8, spec))
        .collect();
}

/// Look up the catalog entry registered for a wire opcode.
pub fn spec_for(opcode: u8) -> Option<&'static CommandSpec> {
    COMMAND_CATALOG.get(&opcode).copied()
}

pub fn opcode_for(op: CommandOp) -> u8 {
    op as u8
}

/// All catalog entries in opcode order.
pub fn catalog() -> impl Iterator<Item = &'static CommandSpec> {
    COMMAND_SPECS.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_opcode_bijection() {
        for opcode in 0..=20u8 {
            let spec = spec_for(opcode).unwrap();
            assert_eq!(opcode_for(spec.op), opcode);
        }
        let ops: HashSet<CommandOp> = catalog().map(|spec| spec.op).collect();
        let names: HashSet<&str> = catalog().map(|spec| spec.name).collect();
        assert_eq!(ops.len(), COMMAND_SPECS.len());
        assert_eq!(names.len(), COMMAND_SPECS.len());
    }

    #[test]
    fn test_catalog_is_in_opcode_order() {
        for (index, spec) in catalog().enumerate() {
            assert_eq!(opcode_for(spec.op) as usize, index);
        }
    }

    #[test]
    fn test_unknown_opcode_has_no_spec() {
        assert_eq!(spec_for(21), None);
        assert_eq!(spec_for(255), None);
    }

    #[test]
    fn test_shared_payload_schemas() {
        assert_eq!(spec_for(14).unwrap().payload, spec_for(15).unwrap().payload);
        assert_eq!(spec_for(6).unwrap().payload, spec_for(17).unwrap().payload);
        assert_eq!(spec_for(12).unwrap().payload, spec_for(20).unwrap().payload);
        assert_eq!(spec_for(16).unwrap().name, "GET_ROOT_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST");
    }
}
