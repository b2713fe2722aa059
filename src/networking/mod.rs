/*!

# Networking Commands

## Introduction

Peers on the root chain and on every shard talk through opcode-tagged binary
commands. The transport (connections, framing, peer bookkeeping) lives outside
this crate: it hands over an opcode and a payload, and gets the same back.

```bytes
opcode      u8, see the table below
payload     the command's fields in declared order, big-endian
```

The `RawCommand` type carries this pair, and `Command::deserialize` turns it
into a typed command by looking the opcode up in the command catalog.

## Opcodes

```bytes
0   HELLO
1   NEW_MINOR_BLOCK_HEADER_LIST
2   NEW_TRANSACTION_LIST
3   GET_PEER_LIST_REQUEST
4   GET_PEER_LIST_RESPONSE
5   GET_ROOT_BLOCK_HEADER_LIST_REQUEST
6   GET_ROOT_BLOCK_HEADER_LIST_RESPONSE
7   GET_ROOT_BLOCK_LIST_REQUEST
8   GET_ROOT_BLOCK_LIST_RESPONSE
9   GET_MINOR_BLOCK_LIST_REQUEST
10  GET_MINOR_BLOCK_LIST_RESPONSE
11  GET_MINOR_BLOCK_HEADER_LIST_REQUEST
12  GET_MINOR_BLOCK_HEADER_LIST_RESPONSE
13  NEW_BLOCK_MINOR
14  PING
15  PONG
16  GET_ROOT_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST
17  GET_ROOT_BLOCK_HEADER_LIST_WITH_SKIP_RESPONSE
18  NEW_ROOT_BLOCK
19  GET_MINOR_BLOCK_HEADER_LIST_WITH_SKIP_REQUEST
20  GET_MINOR_BLOCK_HEADER_LIST_WITH_SKIP_RESPONSE
```

An opcode outside this table is an `UnknownOpcode` error; what to do with the
peer is up to the transport.

## Commands

### HELLO

Sent once by each side after connecting. Carries protocol version, network id,
peer id and address, the chain mask list and the sender's root tip.

### GET_*_HEADER_LIST_WITH_SKIP_REQUEST

Ask for up to `limit` headers starting at a block given by hash or by height,
one every `skip + 1` blocks, walking toward genesis or toward the tip. The
minor chain variant names the shard with a `Branch`.

```bytes
0       address type (0 = hash, 1 = height)
1-32    hash, or height as 256-bit big-endian
        branch (minor chain only)
        limit (u32)
        skip (u32)
        direction (u8, 0 = genesis, 1 = tip)
```

Responses reuse the header list responses of opcodes 6 and 12.

### GET_*_BLOCK_LIST_REQUEST

Fetch full blocks by an explicit hash list.

### PING / PONG

32 opaque bytes, echoed back.

*/

pub mod command;
pub mod command_op;
pub mod message_types;
