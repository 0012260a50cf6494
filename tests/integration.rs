use bytes::Bytes;
use tokio::io::AsyncReadExt;

use redsync::codec::Message;
use redsync::command::Command;
use redsync::rdb::{object, Encoding, ObjectType, RedisObject};
use redsync::sink::CommandSink;

/// A ziplist-encoded list with two immediate-integer entries, exactly as it
/// appears inside an RDB snapshot.
fn ziplist_value() -> Bytes {
    Bytes::from(vec![
        0x0f, 0x00, 0x00, 0x00, // zlbytes = 15
        0x0c, 0x00, 0x00, 0x00, // zltail
        0x02, 0x00, // zllen = 2
        0x00, 0xf1, // first entry, immediate 0
        0x02, 0xfc, // second entry, immediate 11
        0xff, // terminator
    ])
}

#[tokio::test]
async fn replicate_a_snapshot_value_downstream() {
    // A value arrives from the snapshot demultiplexed down to its type tag.
    let object = RedisObject::decode_value(object::RDB_TYPE_LIST_ZIPLIST, ziplist_value()).unwrap();

    assert_eq!(object.object_type(), ObjectType::List);
    assert_eq!(object.encoding(), Encoding::ZipList);
    assert_eq!(object.to_command(), "0 11");
    assert_eq!(object.buffer(), &ziplist_value());

    // Project it into the replay command and frame it onto the wire.
    let command = Command::for_object("numbers", &object).unwrap();
    let (writer, mut remote) = tokio::io::duplex(64);
    let mut sink = CommandSink::new(writer);

    sink.send(Message::Command(command)).await.unwrap();
    sink.send(Message::Shutdown).await.unwrap();
    drop(sink);

    let mut sent = Vec::new();
    remote.read_to_end(&mut sent).await.unwrap();
    assert_eq!(sent, b"RPUSH numbers 0 11\r\n");
}

#[tokio::test]
async fn replicate_an_integer_string_value() {
    let object = RedisObject::decode(
        ObjectType::String,
        Encoding::Int,
        Bytes::from_static(&[0xc1, 0x39, 0x30]),
    )
    .unwrap();

    let command = Command::for_object("counter", &object).unwrap();
    let (writer, mut remote) = tokio::io::duplex(64);
    let mut sink = CommandSink::new(writer);

    sink.send(Message::Command(command)).await.unwrap();
    drop(sink);

    let mut sent = Vec::new();
    remote.read_to_end(&mut sent).await.unwrap();
    assert_eq!(sent, b"SET counter 12345\r\n");
}

#[test]
fn empty_values_emit_nothing() {
    let empty = Bytes::from_static(&[
        0x0b, 0x00, 0x00, 0x00, 0x0a, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff,
    ]);

    let object = RedisObject::decode_value(object::RDB_TYPE_LIST_ZIPLIST, empty).unwrap();

    assert_eq!(object.to_command(), "");
    assert_eq!(Command::for_object("numbers", &object), None);
}

#[test]
fn corrupt_values_never_reach_the_pipeline() {
    let mut corrupt = ziplist_value().to_vec();
    corrupt.pop(); // lose the terminator

    let result = RedisObject::decode_value(object::RDB_TYPE_LIST_ZIPLIST, Bytes::from(corrupt));

    assert!(result.is_err());
}
