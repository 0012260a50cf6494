use crate::rdb::reader::Reader;
use crate::rdb::Error;

// Length-prefix discriminators, held in the top two bits of the first byte.
pub const RDB_6BITLEN: u8 = 0;
pub const RDB_14BITLEN: u8 = 1;
pub const RDB_32BITLEN: u8 = 2;
pub const RDB_ENCVAL: u8 = 3;

// String sub-encodings selected by an `RDB_ENCVAL` prefix.
pub const ENC_INT8: u8 = 0;
pub const ENC_INT16: u8 = 1;
pub const ENC_INT32: u8 = 2;
pub const ENC_LZF: u8 = 3;

/// Reassemble exactly 4 little-endian bytes into a signed 32 bit integer.
pub fn decode_i32_le(src: &[u8]) -> Result<i32, Error> {
    if src.len() != 4 {
        return Err(Error::InvalidArgument(
            "a little-endian i32 takes exactly 4 bytes",
        ));
    }
    Ok(i32::from_le_bytes([src[0], src[1], src[2], src[3]]))
}

/// Reassemble exactly 2 little-endian bytes into an unsigned 16 bit integer.
pub fn decode_u16_le(src: &[u8]) -> Result<u16, Error> {
    if src.len() != 2 {
        return Err(Error::InvalidArgument(
            "a little-endian u16 takes exactly 2 bytes",
        ));
    }
    Ok(u16::from_le_bytes([src[0], src[1]]))
}

/// The RDB variable length prefix. Most of the time it carries a plain
/// payload length; with an `RDB_ENCVAL` discriminator it instead names the
/// special encoding of the string that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    Plain(u32),
    Encoded(u8),
}

impl Length {
    pub fn read(reader: &mut Reader) -> Result<Length, Error> {
        let first = reader.read_u8()?;
        match first >> 6 {
            RDB_6BITLEN => Ok(Length::Plain((first & 0x3f) as u32)),
            RDB_14BITLEN => {
                let next = reader.read_u8()?;
                Ok(Length::Plain((((first & 0x3f) as u32) << 8) | next as u32))
            }
            // The 4 byte form is stored in network byte order, unlike the
            // little-endian integers inside encoded values.
            RDB_32BITLEN => {
                let bytes = reader.read_exact(4)?;
                Ok(Length::Plain(u32::from_be_bytes([
                    bytes[0], bytes[1], bytes[2], bytes[3],
                ])))
            }
            _ => Ok(Length::Encoded(first & 0x3f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_i32_le_one() {
        assert_eq!(decode_i32_le(&[0x01, 0x00, 0x00, 0x00]), Ok(1));
    }

    #[test]
    fn decode_i32_le_minus_one() {
        assert_eq!(decode_i32_le(&[0xff, 0xff, 0xff, 0xff]), Ok(-1));
    }

    #[test]
    fn decode_i32_le_rejects_wrong_sizes() {
        assert!(matches!(
            decode_i32_le(&[0x01, 0x00]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            decode_i32_le(&[0x01, 0x00, 0x00, 0x00, 0x00]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn decode_u16_le_values() {
        assert_eq!(decode_u16_le(&[0x03, 0x00]), Ok(3));
        assert_eq!(decode_u16_le(&[0x00, 0x01]), Ok(256));
        assert!(matches!(
            decode_u16_le(&[0x03]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn read_6_bit_length() {
        let mut reader = Reader::new(&[0x2a]);

        assert_eq!(Length::read(&mut reader), Ok(Length::Plain(42)));
    }

    #[test]
    fn read_14_bit_length() {
        // 01|000001 00000000 -> 0x0100
        let mut reader = Reader::new(&[0x41, 0x00]);

        assert_eq!(Length::read(&mut reader), Ok(Length::Plain(256)));
    }

    #[test]
    fn read_32_bit_length() {
        let mut reader = Reader::new(&[0x80, 0x00, 0x01, 0x00, 0x00]);

        assert_eq!(Length::read(&mut reader), Ok(Length::Plain(65536)));
    }

    #[test]
    fn read_special_encoding_selector() {
        let mut reader = Reader::new(&[0xc0 | ENC_INT16]);

        assert_eq!(Length::read(&mut reader), Ok(Length::Encoded(ENC_INT16)));
    }

    #[test]
    fn read_length_from_empty_buffer() {
        let mut reader = Reader::new(&[]);

        assert_eq!(Length::read(&mut reader), Err(Error::Truncated));
    }
}
