use futures::SinkExt;
use tokio::io::AsyncWrite;
use tokio_util::codec::FramedWrite;

use crate::codec::{CommandCodec, Message};
use crate::Error;

/// Write half of the downstream session. Framing is delegated to
/// `CommandCodec`; ordering on a shared writer stays the caller's contract.
pub struct CommandSink<W> {
    framed: FramedWrite<W, CommandCodec>,
}

impl<W: AsyncWrite + Unpin> CommandSink<W> {
    pub fn new(writer: W) -> CommandSink<W> {
        CommandSink {
            framed: FramedWrite::new(writer, CommandCodec),
        }
    }

    /// Forward one message, flushing its frame to the writer. Messages the
    /// codec does not recognize are dropped there and flush nothing.
    pub async fn send(&mut self, message: Message) -> Result<(), Error> {
        self.framed.send(message).await
    }

    pub fn into_inner(self) -> W {
        self.framed.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn forward_framed_commands() {
        let (writer, mut remote) = tokio::io::duplex(64);
        let mut sink = CommandSink::new(writer);

        sink.send(Message::Command(Command::new("SET k v")))
            .await
            .unwrap();

        let mut buf = [0u8; 9];
        remote.read_exact(&mut buf).await.unwrap();
        assert_eq!(&buf, b"SET k v\r\n");
    }

    #[tokio::test]
    async fn unrecognized_messages_reach_no_writer() {
        let (writer, mut remote) = tokio::io::duplex(64);
        let mut sink = CommandSink::new(writer);

        sink.send(Message::Shutdown).await.unwrap();
        drop(sink);

        let mut buf = Vec::new();
        remote.read_to_end(&mut buf).await.unwrap();
        assert!(buf.is_empty());
    }
}
