use std::fmt;

use bytes::Bytes;

use crate::rdb::{ObjectType, RedisObject};

/// One outbound write command, carried as the exact payload bytes that go
/// on the wire. Framing (the trailing CR LF) belongs to the codec.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    payload: Bytes,
}

impl Command {
    pub fn new(payload: impl Into<Bytes>) -> Command {
        Command {
            payload: payload.into(),
        }
    }

    /// Build the command that replays `object` under `key` on the target:
    /// the write verb for the object's type, the key, then the decoded
    /// elements in on-wire order. Objects that decoded to no elements
    /// produce no command at all.
    pub fn for_object(key: &str, object: &RedisObject) -> Option<Command> {
        let body = object.to_command();
        if body.is_empty() {
            return None;
        }

        let verb = match object.object_type() {
            ObjectType::String => "SET",
            ObjectType::List => "RPUSH",
            ObjectType::Set => "SADD",
            ObjectType::ZSet => "ZADD",
            ObjectType::Hash => "HMSET",
        };

        Some(Command::new(format!("{} {} {}", verb, key, body)))
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.payload))
    }
}
