use thiserror::Error;

use crate::networking::command_op::CommandOp;

/// Errors returned while decoding a wire payload.
///
/// Every variant carries the byte offset into the payload at which decoding
/// stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// Fewer bytes remain than a fixed-width field requires.
    #[error("truncated input at byte {offset}: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    /// A list prefix declares more elements than the remaining bytes could hold.
    #[error("list count {count} at byte {offset} exceeds the {remaining} bytes remaining")]
    CountOverflow {
        offset: usize,
        count: u32,
        remaining: usize,
    },
    /// A discriminator byte outside its enumeration.
    #[error("invalid {field} value {value} at byte {offset}")]
    InvalidValue {
        field: &'static str,
        value: u8,
        offset: usize,
    },
    /// The value decoded but the buffer was not fully consumed.
    #[error("{remaining} trailing bytes after byte {offset}")]
    TrailingBytes { offset: usize, remaining: usize },
}

impl SerializeError {
    /// Byte offset at which decoding failed.
    pub fn offset(&self) -> usize {
        match self {
            SerializeError::TruncatedInput { offset, .. }
            | SerializeError::CountOverflow { offset, .. }
            | SerializeError::InvalidValue { offset, .. }
            | SerializeError::TrailingBytes { offset, .. } => *offset,
        }
    }
}

/// Errors surfaced when turning an (opcode, payload) pair into a `Command`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The opcode has no entry in the command catalog.
    #[error("unknown command opcode {0}")]
    UnknownOpcode(u8),
    /// The payload does not decode as the schema registered for its opcode.
    #[error("malformed {op:?} payload at byte {offset}: {source}")]
    MalformedPayload {
        op: CommandOp,
        offset: usize,
        #[source]
        source: SerializeError,
    },
}

/// Violations of the `NewMinorBlockHeaderListCommand` addressing rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShardConstraintError {
    #[error("root chain announcement carries {0} minor block headers")]
    HeadersSentToRoot(usize),
    #[error("minor block header {index} belongs to another shard")]
    ForeignShardHeader { index: usize },
}
