use crate::rdb::length::{self, decode_i32_le, Length};
use crate::rdb::reader::Reader;
use crate::rdb::Error;

/// Decode a length-prefixed raw string into its single element.
pub(crate) fn decode_raw(buffer: &[u8]) -> Result<Vec<String>, Error> {
    let mut reader = Reader::new(buffer);

    let payload_length = match Length::read(&mut reader)? {
        Length::Plain(length) => length as usize,
        Length::Encoded(_) => {
            return Err(Error::Format("raw string carries a special encoding prefix"))
        }
    };
    let payload = reader.read_exact(payload_length)?;
    if reader.remaining() != 0 {
        return Err(Error::Format("trailing bytes after string payload"));
    }

    let value = std::str::from_utf8(payload)
        .map_err(|_| Error::Format("string payload is not valid UTF-8"))?;

    Ok(vec![value.to_string()])
}

/// Decode an integer-encoded string into its decimal text element. The
/// integer payloads are little-endian and signed, per rdbLoadIntegerObject.
pub(crate) fn decode_int(buffer: &[u8]) -> Result<Vec<String>, Error> {
    let mut reader = Reader::new(buffer);

    let encoding = match Length::read(&mut reader)? {
        Length::Encoded(encoding) => encoding,
        Length::Plain(_) => {
            return Err(Error::Format("integer string carries a plain length prefix"))
        }
    };
    let value: i64 = match encoding {
        length::ENC_INT8 => reader.read_u8()? as i8 as i64,
        length::ENC_INT16 => {
            let bytes = reader.read_exact(2)?;
            i16::from_le_bytes([bytes[0], bytes[1]]) as i64
        }
        length::ENC_INT32 => decode_i32_le(reader.read_exact(4)?)? as i64,
        length::ENC_LZF => {
            return Err(Error::Format("compressed string payloads are not supported"))
        }
        _ => return Err(Error::Format("unknown string sub-encoding")),
    };
    if reader.remaining() != 0 {
        return Err(Error::Format("trailing bytes after string payload"));
    }

    Ok(vec![value.to_string()])
}
