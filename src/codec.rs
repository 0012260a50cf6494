use bytes::BytesMut;
use tokio_util::codec::Encoder;
use tracing::{debug, warn};

use crate::command::Command;
use crate::Error;

static CRLF: &[u8; 2] = b"\r\n";

/// Messages travelling the outbound pipeline. Only commands reach the wire;
/// everything else is session-control traffic consumed before the socket.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Command(Command),
    /// Tear-down marker for the session driver; never encoded.
    Shutdown,
}

pub struct CommandCodec;

impl Encoder<Message> for CommandCodec {
    type Error = Error;

    fn encode(&mut self, message: Message, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match message {
            Message::Command(command) => {
                debug!("send command: {}", command);
                dst.reserve(command.payload().len() + CRLF.len());
                dst.extend_from_slice(command.payload());
                dst.extend_from_slice(CRLF);
                Ok(())
            }
            // The pipeline may carry message kinds this codec does not
            // recognize. They are absorbed with a diagnostic instead of an
            // error: a foreign message must not abort an otherwise healthy
            // outbound stream.
            message => {
                warn!("cannot encode message: {:?}", message);
                Ok(())
            }
        }
    }
}
