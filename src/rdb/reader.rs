use crate::rdb::Error;

/// Forward-only cursor over one value's bytes. There is deliberately no way
/// to seek or rewind: every decoder makes a single pass, and a misread
/// offset surfaces as an error instead of a silent re-read.
pub struct Reader<'a> {
    buf: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Reader<'a> {
        Reader { buf, position: 0 }
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        if self.remaining() == 0 {
            return Err(Error::Truncated);
        }
        let byte = self.buf[self.position];
        self.position += 1;
        Ok(byte)
    }

    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], Error> {
        if self.remaining() < n {
            return Err(Error::Truncated);
        }
        let bytes = &self.buf[self.position..self.position + n];
        self.position += n;
        Ok(bytes)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }
}
