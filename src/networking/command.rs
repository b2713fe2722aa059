use tracing::{debug, trace};

use crate::chain::ChainTypes;
use crate::error::DispatchError;
use crate::serialize::Serializable;

use super::command_op::{opcode_for, spec_for, CommandOp};
use super::message_types::block_list::{
    GetMinorBlockListRequest, GetMinorBlockListResponse, GetRootBlockListRequest,
    GetRootBlockListResponse,
};
use super::message_types::broadcast::{
    NewBlockMinorCommand, NewRootBlockCommand, NewTransactionListCommand,
};
use super::message_types::header_list::{
    GetMinorBlockHeaderListRequest, GetMinorBlockHeaderListResponse,
    GetRootBlockHeaderListRequest, GetRootBlockHeaderListResponse, NewMinorBlockHeaderListCommand,
};
use super::message_types::hello::HelloCommand;
use super::message_types::peer_list::{GetPeerListRequest, GetPeerListResponse};
use super::message_types::ping_pong::PingPongCommand;
use super::message_types::skip_query::{
    GetMinorBlockHeaderListWithSkipRequest, GetRootBlockHeaderListWithSkipRequest,
};

/// What is handed to, and received from, the transport: an opcode and an
/// encoded payload. Framing around the pair is the transport's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub opcode: u8,
    pub payload: Vec<u8>,
}

/// A decoded protocol command. Each variant corresponds to exactly one opcode.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<C: ChainTypes> {
    Hello(HelloCommand<C>),
    NewMinorBlockHeaderList(NewMinorBlockHeaderListCommand<C>),
    NewTransactionList(NewTransactionListCommand<C>),
    GetPeerListRequest(GetPeerListRequest),
    GetPeerListResponse(GetPeerListResponse),
    GetRootBlockHeaderListRequest(GetRootBlockHeaderListRequest),
    GetRootBlockHeaderListResponse(GetRootBlockHeaderListResponse<C>),
    GetRootBlockListRequest(GetRootBlockListRequest),
    GetRootBlockListResponse(GetRootBlockListResponse<C>),
    GetMinorBlockListRequest(GetMinorBlockListRequest),
    GetMinorBlockListResponse(GetMinorBlockListResponse<C>),
    GetMinorBlockHeaderListRequest(GetMinorBlockHeaderListRequest<C>),
    GetMinorBlockHeaderListResponse(GetMinorBlockHeaderListResponse<C>),
    NewBlockMinor(NewBlockMinorCommand<C>),
    Ping(PingPongCommand),
    Pong(PingPongCommand),
    GetRootBlockHeaderListWithSkipRequest(GetRootBlockHeaderListWithSkipRequest),
    GetRootBlockHeaderListWithSkipResponse(GetRootBlockHeaderListResponse<C>),
    NewRootBlock(NewRootBlockCommand<C>),
    GetMinorBlockHeaderListWithSkipRequest(GetMinorBlockHeaderListWithSkipRequest<C>),
    GetMinorBlockHeaderListWithSkipResponse(GetMinorBlockHeaderListResponse<C>),
}

impl<C: ChainTypes> Command<C> {
    pub fn op(&self) -> CommandOp {
        match self {
            Command::Hello(_) => CommandOp::Hello,
            Command::NewMinorBlockHeaderList(_) => CommandOp::NewMinorBlockHeaderList,
            Command::NewTransactionList(_) => CommandOp::NewTransactionList,
            Command::GetPeerListRequest(_) => CommandOp::GetPeerListRequest,
            Command::GetPeerListResponse(_) => CommandOp::GetPeerListResponse,
            Command::GetRootBlockHeaderListRequest(_) => CommandOp::GetRootBlockHeaderListRequest,
            Command::GetRootBlockHeaderListResponse(_) => {
                CommandOp::GetRootBlockHeaderListResponse
            }
            Command::GetRootBlockListRequest(_) => CommandOp::GetRootBlockListRequest,
            Command::GetRootBlockListResponse(_) => CommandOp::GetRootBlockListResponse,
            Command::GetMinorBlockListRequest(_) => CommandOp::GetMinorBlockListRequest,
            Command::GetMinorBlockListResponse(_) => CommandOp::GetMinorBlockListResponse,
            Command::GetMinorBlockHeaderListRequest(_) => {
                CommandOp::GetMinorBlockHeaderListRequest
            }
            Command::GetMinorBlockHeaderListResponse(_) => {
                CommandOp::GetMinorBlockHeaderListResponse
            }
            Command::NewBlockMinor(_) => CommandOp::NewBlockMinor,
            Command::Ping(_) => CommandOp::Ping,
            Command::Pong(_) => CommandOp::Pong,
            Command::GetRootBlockHeaderListWithSkipRequest(_) => {
                CommandOp::GetRootBlockHeaderListWithSkipRequest
            }
            Command::GetRootBlockHeaderListWithSkipResponse(_) => {
                CommandOp::GetRootBlockHeaderListWithSkipResponse
            }
            Command::NewRootBlock(_) => CommandOp::NewRootBlock,
            Command::GetMinorBlockHeaderListWithSkipRequest(_) => {
                CommandOp::GetMinorBlockHeaderListWithSkipRequest
            }
            Command::GetMinorBlockHeaderListWithSkipResponse(_) => {
                CommandOp::GetMinorBlockHeaderListWithSkipResponse
            }
        }
    }

    pub fn serialize_payload(&self) -> Vec<u8> {
        match self {
            Command::Hello(payload) => payload.serialize(),
            Command::NewMinorBlockHeaderList(payload) => payload.serialize(),
            Command::NewTransactionList(payload) => payload.serialize(),
            Command::GetPeerListRequest(payload) => payload.serialize(),
            Command::GetPeerListResponse(payload) => payload.serialize(),
            Command::GetRootBlockHeaderListRequest(payload) => payload.serialize(),
            Command::GetRootBlockHeaderListResponse(payload) => payload.serialize(),
            Command::GetRootBlockListRequest(payload) => payload.serialize(),
            Command::GetRootBlockListResponse(payload) => payload.serialize(),
            Command::GetMinorBlockListRequest(payload) => payload.serialize(),
            Command::GetMinorBlockListResponse(payload) => payload.serialize(),
            Command::GetMinorBlockHeaderListRequest(payload) => payload.serialize(),
            Command::GetMinorBlockHeaderListResponse(payload) => payload.serialize(),
            Command::NewBlockMinor(payload) => payload.serialize(),
            Command::Ping(payload) | Command::Pong(payload) => payload.serialize(),
            Command::GetRootBlockHeaderListWithSkipRequest(payload) => payload.serialize(),
            Command::GetRootBlockHeaderListWithSkipResponse(payload) => payload.serialize(),
            Command::NewRootBlock(payload) => payload.serialize(),
            Command::GetMinorBlockHeaderListWithSkipRequest(payload) => payload.serialize(),
            Command::GetMinorBlockHeaderListWithSkipResponse(payload) => payload.serialize(),
        }
    }

    /// Encode for the transport.
    pub fn serialize(&self) -> RawCommand {
        let opcode = opcode_for(self.op());
        let payload = self.serialize_payload();
        trace!(opcode, len = payload.len(), "serialized command");
        RawCommand { opcode, payload }
    }

    /// Decode a payload received with `opcode`.
    ///
    /// The payload must be consumed exactly; a short or overlong payload is
    /// `MalformedPayload`, an opcode missing from the catalog is `UnknownOpcode`.
    pub fn deserialize(opcode: u8, payload: &[u8]) -> Result<Self, DispatchError> {
        let spec = match spec_for(opcode) {
            Some(spec) => spec,
            None => {
                debug!(opcode, "unknown command opcode");
                return Err(DispatchError::UnknownOpcode(opcode));
            }
        };
        let op = spec.op;
        let command = match op {
            CommandOp::Hello => Command::Hello(decode(op, payload)?),
            CommandOp::NewMinorBlockHeaderList => {
                Command::NewMinorBlockHeaderList(decode(op, payload)?)
            }
            CommandOp::NewTransactionList => Command::NewTransactionList(decode(op, payload)?),
            CommandOp::GetPeerListRequest => Command::GetPeerListRequest(decode(op, payload)?),
            CommandOp::GetPeerListResponse => Command::GetPeerListResponse(decode(op, payload)?),
            CommandOp::GetRootBlockHeaderListRequest => {
                Command::GetRootBlockHeaderListRequest(decode(op, payload)?)
            }
            CommandOp::GetRootBlockHeaderListResponse => {
                Command::GetRootBlockHeaderListResponse(decode(op, payload)?)
            }
            CommandOp::GetRootBlockListRequest => {
                Command::GetRootBlockListRequest(decode(op, payload)?)
            }
            CommandOp::GetRootBlockListResponse => {
                Command::GetRootBlockListResponse(decode(op, payload)?)
            }
            CommandOp::GetMinorBlockListRequest => {
                Command::GetMinorBlockListRequest(decode(op, payload)?)
            }
            CommandOp::GetMinorBlockListResponse => {
                Command::GetMinorBlockListResponse(decode(op, payload)?)
            }
            CommandOp::GetMinorBlockHeaderListRequest => {
                Command::GetMinorBlockHeaderListRequest(decode(op, payload)?)
            }
            CommandOp::GetMinorBlockHeaderListResponse => {
                Command::GetMinorBlockHeaderListResponse(decode(op, payload)?)
            }
            CommandOp::NewBlockMinor => Command::NewBlockMinor(decode(op, payload)?),
            CommandOp::Ping => Command::Ping(decode(op, payload)?),
            CommandOp::Pong => Command::Pong(decode(op, payload)?),
            CommandOp::GetRootBlockHeaderListWithSkipRequest => {
                Command::GetRootBlockHeaderListWithSkipRequest(decode(op, payload)?)
            }
            CommandOp::GetRootBlockHeaderListWithSkipResponse => {
                Command::GetRootBlockHeaderListWithSkipResponse(decode(op, payload)?)
            }
            CommandOp::NewRootBlock => Command::NewRootBlock(decode(op, payload)?),
            CommandOp::GetMinorBlockHeaderListWithSkipRequest => {
                Command::GetMinorBlockHeaderListWithSkipRequest(decode(op, payload)?)
            }
            CommandOp::GetMinorBlockHeaderListWithSkipResponse => {
                Command::GetMinorBlockHeaderListWithSkipResponse(decode(op, payload)?)
            }
        };
        trace!(command = spec.name, len = payload.len(), "deserialized command");
        Ok(command)
    }

    pub fn from_raw(raw: &RawCommand) -> Result<Self, DispatchError> {
        Command::deserialize(raw.opcode, &raw.payload)
    }
}

fn decode<T: Serializable>(op: CommandOp, payload: &[u8]) -> Result<T, DispatchError> {
    T::deserialize(payload).map_err(|source| {
        debug!(?op, %source, "malformed command payload");
        DispatchError::MalformedPayload {
            op,
            offset: source.offset(),
            source,
        }
    })
}
