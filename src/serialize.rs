/*!
# Binary Codec

Every protocol value has a fixed, schema-known layout:

```bytes
uint8 / uint16 / uint32 / uint64 / uint128    1 / 2 / 4 / 8 / 16 bytes, big-endian
hash256                                       32 bytes, opaque
list of T                                     4-byte big-endian count, then count encodings of T
structure                                     field encodings in declared order, no tags, no padding
```

There are no varints and no self-describing markers, so a payload can only be
decoded by a reader that already knows its schema (see `networking::command_op`).
Structures get their codec from `#[derive(Serializable)]`.
*/
use crate::error::SerializeError;

/// 32-byte hash as carried on the wire.
pub type Hash256 = [u8; 32];

/// Width of the count prefix in front of every list.
pub const LIST_COUNT_SIZE: usize = 4;

// a hostile count is bounded by the buffer size, but elements can be much
// larger in memory than on the wire
const LIST_PREALLOCATION_LIMIT: usize = 1024;

/// A cursor over a borrowed payload which remembers how far decoding got.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteReader { bytes, offset: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], SerializeError> {
        if len > self.remaining() {
            return Err(SerializeError::TruncatedInput {
                offset: self.offset,
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], SerializeError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.read_bytes(N)?);
        Ok(array)
    }
}

/// A value with a deterministic binary encoding.
///
/// `serialize_into` must be a pure function of `self`, and for every value
/// `x`, `deserialize(&x.serialize()) == Ok(x)`.
pub trait Serializable: Sized {
    fn serialize_into(&self, out: &mut Vec<u8>);

    fn deserialize_from(reader: &mut ByteReader<'_>) -> Result<Self, SerializeError>;

    fn serialize(&self) -> Vec<u8> {
        let mut vbytes: Vec<u8> = vec![];
        self.serialize_into(&mut vbytes);
        vbytes
    }

    /// Decode a value that must span the whole buffer.
    fn deserialize(bytes: &[u8]) -> Result<Self, SerializeError> {
        let mut reader = ByteReader::new(bytes);
        let value = Self::deserialize_from(&mut reader)?;
        if !reader.is_empty() {
            return Err(SerializeError::TrailingBytes {
                offset: reader.offset(),
                remaining: reader.remaining(),
            });
        }
        Ok(value)
    }

    /// Decode a value from the front of the buffer, returning the bytes consumed.
    fn deserialize_prefix(bytes: &[u8]) -> Result<(Self, usize), SerializeError> {
        let mut reader = ByteReader::new(bytes);
        let value = Self::deserialize_from(&mut reader)?;
        Ok((value, reader.offset()))
    }
}

macro_rules! impl_serializable_for_uint {
    ($($uint:ty),*) => {
        $(
            impl Serializable for $uint {
                fn serialize_into(&self, out: &mut Vec<u8>) {
                    out.extend(&self.to_be_bytes());
                }

                fn deserialize_from(reader: &mut ByteReader<'_>) -> Result<Self, SerializeError> {
                    Ok(<$uint>::from_be_bytes(reader.read_array()?))
                }
            }
        )*
    };
}

impl_serializable_for_uint!(u8, u16, u32, u64, u128);

impl Serializable for Hash256 {
    fn serialize_into(&self, out: &mut Vec<u8>) {
        out.extend(self);
    }

    fn deserialize_from(reader: &mut ByteReader<'_>) -> Result<Self, SerializeError> {
        reader.read_array()
    }
}

impl<T: Serializable> Serializable for Vec<T> {
    fn serialize_into(&self, out: &mut Vec<u8>) {
        out.extend(&(self.len() as u32).to_be_bytes());
        for item in self {
            item.serialize_into(out);
        }
    }

    fn deserialize_from(reader: &mut ByteReader<'_>) -> Result<Self, SerializeError> {
        let offset = reader.offset();
        let count = u32::deserialize_from(reader)?;
        // every element occupies at least one byte
        if count as usize > reader.remaining() {
            return Err(SerializeError::CountOverflow {
                offset,
                count,
                remaining: reader.remaining(),
            });
        }
        let mut items = Vec::with_capacity((count as usize).min(LIST_PREALLOCATION_LIMIT));
        for _ in 0..count {
            items.push(T::deserialize_from(reader)?);
        }
        Ok(items)
    }
}
