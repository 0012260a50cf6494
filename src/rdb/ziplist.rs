// Ziplist layout: <zlbytes><zltail><zllen><entry>...<entry><zlend>
// https://rdb.fnordig.de/file_format.html#ziplist-encoding

use crate::rdb::length::{decode_i32_le, decode_u16_le};
use crate::rdb::reader::Reader;
use crate::rdb::Error;

const ZLEND: u8 = 0xff;

/// A decoded ziplist. Lists, hashes and sorted sets small enough to fit are
/// all stored this way; for hashes and sorted sets the entries alternate
/// between member and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Ziplist {
    tail_offset: u32,
    entry_count: u16,
    entries: Vec<String>,
}

impl Ziplist {
    pub fn decode(buffer: &[u8]) -> Result<Ziplist, Error> {
        let mut reader = Reader::new(buffer);

        // zlbytes covers the whole ziplist, header and terminator included.
        let declared_total = decode_i32_le(reader.read_exact(4)?)?;
        if declared_total != buffer.len() as i32 {
            return Err(Error::Format("ziplist length header does not match buffer"));
        }

        let tail_offset = decode_i32_le(reader.read_exact(4)?)? as u32;
        let entry_count = decode_u16_le(reader.read_exact(2)?)?;

        let mut entries = Vec::with_capacity(entry_count as usize);
        // Bytes consumed since the previous back-link, checked against the
        // next entry's declared previous-entry length.
        let mut element_read_length: usize = 0;

        for _ in 0..entry_count {
            let prev_length = reader.read_u8()?;
            element_read_length += 1;
            if prev_length != 0 {
                // Minus one for the back-link byte just consumed, which
                // already counts towards the current entry.
                if element_read_length - 1 != prev_length as usize {
                    return Err(Error::Format("ziplist entry back-link mismatch"));
                }
                element_read_length = 1;
            }

            let flag = reader.read_u8()?;
            element_read_length += 1;
            entries.push(decode_entry(flag)?);
        }

        if reader.read_u8()? != ZLEND {
            return Err(Error::Format("ziplist terminator missing"));
        }

        Ok(Ziplist {
            tail_offset,
            entry_count,
            entries,
        })
    }

    /// Offset of the last entry, straight from the `zltail` header field.
    /// Kept for diagnostics; forward decoding never uses it.
    pub fn tail_offset(&self) -> u32 {
        self.tail_offset
    }

    pub fn entry_count(&self) -> u16 {
        self.entry_count
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

/// Registry adapter for ziplist-encoded lists, hashes and sorted sets.
pub(crate) fn decode_elements(buffer: &[u8]) -> Result<Vec<String>, Error> {
    Ziplist::decode(buffer).map(Ziplist::into_entries)
}

// Entry special flag table:
//   |00pppppp|          string, 6 bit length
//   |01pppppp|qqqqqqqq| string, 14 bit length
//   |10______|<4 bytes> string, 32 bit length
//   |1100____| int16    |1101____| int32    |1110____| int64
//   |11110000| int24    |11111110| int8
//   |1111xxxx| immediate integer 0..12, stored as xxxx = value + 1
//
// Only the immediate integer form occurs in the snapshots this agent
// replicates. A contiguous variable-length encoding offers no way to resync
// after a partial decode, so every other pattern fails here instead of
// skipping ahead.
fn decode_entry(flag: u8) -> Result<String, Error> {
    if flag >> 4 == 0b1111 && matches!(flag & 0x0f, 0x01..=0x0d) {
        let value = (flag & 0x0f) as i32 - 1;
        return Ok(value.to_string());
    }
    Err(Error::Format("unsupported ziplist entry flag"))
}
