// RDB value decoding. The surrounding replication session hands each value
// over as one self-contained buffer, already demultiplexed down to its type
// tag; everything below reconstructs the typed elements from those bytes.
//
// Format reference: https://rdb.fnordig.de/file_format.html

pub mod length;
pub mod object;
pub mod reader;
pub mod string;
pub mod ziplist;

pub use object::{Encoding, ObjectType, RedisObject};
pub use ziplist::Ziplist;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError, PartialEq)]
pub enum Error {
    #[error("not enough data is available to decode an entire value")]
    Truncated,
    #[error("malformed value: {0}")]
    Format(&'static str),
    #[error("no decoder registered for a {object_type:?} object with {encoding:?} encoding")]
    Unsupported {
        object_type: ObjectType,
        encoding: Encoding,
    },
    #[error("invalid value type tag: {0}")]
    InvalidTypeTag(u8),
    #[error("invalid object encoding tag: {0}")]
    InvalidEncodingTag(u8),
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
