use bytes::Bytes;

use crate::rdb::{string, ziplist, Error};

// Value type tags as rdb.h names them.
pub const RDB_TYPE_STRING: u8 = 0;
pub const RDB_TYPE_LIST: u8 = 1;
pub const RDB_TYPE_SET: u8 = 2;
pub const RDB_TYPE_ZSET: u8 = 3;
pub const RDB_TYPE_HASH: u8 = 4;

// Tags for values saved inside a compact encoded wrapper.
pub const RDB_TYPE_HASH_ZIPMAP: u8 = 9;
pub const RDB_TYPE_LIST_ZIPLIST: u8 = 10;
pub const RDB_TYPE_SET_INTSET: u8 = 11;
pub const RDB_TYPE_ZSET_ZIPLIST: u8 = 12;
pub const RDB_TYPE_HASH_ZIPLIST: u8 = 13;

// Object encoding tags, mirroring object.h.
pub const ENCODING_RAW: u8 = 0;
pub const ENCODING_INT: u8 = 1;
pub const ENCODING_HASHTABLE: u8 = 2;
pub const ENCODING_ZIPMAP: u8 = 3;
pub const ENCODING_LINKEDLIST: u8 = 4;
pub const ENCODING_ZIPLIST: u8 = 5;
pub const ENCODING_INTSET: u8 = 6;
pub const ENCODING_SKIPLIST: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    String,
    List,
    Set,
    ZSet,
    Hash,
}

impl TryFrom<u8> for ObjectType {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            RDB_TYPE_STRING => Ok(Self::String),
            RDB_TYPE_LIST => Ok(Self::List),
            RDB_TYPE_SET => Ok(Self::Set),
            RDB_TYPE_ZSET => Ok(Self::ZSet),
            RDB_TYPE_HASH => Ok(Self::Hash),
            tag => Err(Error::InvalidTypeTag(tag)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Raw,
    Int,
    HashTable,
    ZipMap,
    LinkedList,
    ZipList,
    IntSet,
    SkipList,
}

impl TryFrom<u8> for Encoding {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            ENCODING_RAW => Ok(Self::Raw),
            ENCODING_INT => Ok(Self::Int),
            ENCODING_HASHTABLE => Ok(Self::HashTable),
            ENCODING_ZIPMAP => Ok(Self::ZipMap),
            ENCODING_LINKEDLIST => Ok(Self::LinkedList),
            ENCODING_ZIPLIST => Ok(Self::ZipList),
            ENCODING_INTSET => Ok(Self::IntSet),
            ENCODING_SKIPLIST => Ok(Self::SkipList),
            tag => Err(Error::InvalidEncodingTag(tag)),
        }
    }
}

/// Split an RDB value type tag into the `(type, encoding)` pair it declares.
pub fn split_value_tag(tag: u8) -> Result<(ObjectType, Encoding), Error> {
    match tag {
        RDB_TYPE_STRING => Ok((ObjectType::String, Encoding::Raw)),
        RDB_TYPE_LIST => Ok((ObjectType::List, Encoding::LinkedList)),
        RDB_TYPE_SET => Ok((ObjectType::Set, Encoding::HashTable)),
        RDB_TYPE_ZSET => Ok((ObjectType::ZSet, Encoding::SkipList)),
        RDB_TYPE_HASH => Ok((ObjectType::Hash, Encoding::HashTable)),
        RDB_TYPE_HASH_ZIPMAP => Ok((ObjectType::Hash, Encoding::ZipMap)),
        RDB_TYPE_LIST_ZIPLIST => Ok((ObjectType::List, Encoding::ZipList)),
        RDB_TYPE_SET_INTSET => Ok((ObjectType::Set, Encoding::IntSet)),
        RDB_TYPE_ZSET_ZIPLIST => Ok((ObjectType::ZSet, Encoding::ZipList)),
        RDB_TYPE_HASH_ZIPLIST => Ok((ObjectType::Hash, Encoding::ZipList)),
        tag => Err(Error::InvalidTypeTag(tag)),
    }
}

type DecodeFn = fn(&[u8]) -> Result<Vec<String>, Error>;

/// Registry of the `(type, encoding)` pairs this agent can decode. New
/// encodings plug in here without touching the object itself.
fn decoder(object_type: ObjectType, encoding: Encoding) -> Option<DecodeFn> {
    match (object_type, encoding) {
        (ObjectType::String, Encoding::Raw) => Some(string::decode_raw),
        (ObjectType::String, Encoding::Int) => Some(string::decode_int),
        (ObjectType::List, Encoding::ZipList)
        | (ObjectType::ZSet, Encoding::ZipList)
        | (ObjectType::Hash, Encoding::ZipList) => Some(ziplist::decode_elements),
        _ => None,
    }
}

/// One decoded value. Type, encoding and source bytes are fixed at
/// construction; a changed value downstream means a new object decoded from
/// a new buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct RedisObject {
    object_type: ObjectType,
    encoding: Encoding,
    buffer: Bytes,
    elements: Vec<String>,
}

impl RedisObject {
    /// Decode one value. Construction is total: either every element is
    /// decoded or the error propagates and no object exists.
    pub fn decode(
        object_type: ObjectType,
        encoding: Encoding,
        buffer: Bytes,
    ) -> Result<RedisObject, Error> {
        let decode = decoder(object_type, encoding).ok_or(Error::Unsupported {
            object_type,
            encoding,
        })?;
        let elements = decode(&buffer)?;

        Ok(RedisObject {
            object_type,
            encoding,
            buffer,
            elements,
        })
    }

    /// Decode a value that is demultiplexed only down to its RDB type tag.
    pub fn decode_value(tag: u8, buffer: Bytes) -> Result<RedisObject, Error> {
        let (object_type, encoding) = split_value_tag(tag)?;
        Self::decode(object_type, encoding, buffer)
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Decoded scalar values, in on-wire order. Multi-value commands built
    /// from them must keep this order.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// The exact bytes this object was decoded from. Never parsed a second
    /// time; kept for diagnostics and re-serialization.
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// Project the elements into a single command body: values joined by
    /// one space, no trailing separator. An object with no elements yields
    /// the empty string, and the caller decides whether that still becomes
    /// a command.
    pub fn to_command(&self) -> String {
        self.elements.join(" ")
    }
}
