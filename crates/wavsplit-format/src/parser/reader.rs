//! Offset-tracking little-endian reader used by the parser.

use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{FormatError, FormatResult};
use crate::fourcc::FourCc;

/// Wraps the caller's stream and counts every byte consumed.
///
/// End of stream surfaces as [`FormatError::MalformedHeader`] naming the
/// field being read; other I/O failures pass through as [`FormatError::Io`].
pub(crate) struct HeaderReader<'a, R> {
    inner: &'a mut R,
    consumed: u64,
}

impl<'a, R: Read> HeaderReader<'a, R> {
    pub fn new(inner: &'a mut R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn read_u16(&mut self, field: &str) -> FormatResult<u16> {
        let value = self
            .inner
            .read_u16::<LittleEndian>()
            .map_err(|e| self.read_error(e, field))?;
        self.consumed += 2;
        Ok(value)
    }

    pub fn read_u32(&mut self, field: &str) -> FormatResult<u32> {
        let value = self
            .inner
            .read_u32::<LittleEndian>()
            .map_err(|e| self.read_error(e, field))?;
        self.consumed += 4;
        Ok(value)
    }

    pub fn read_tag(&mut self, field: &str) -> FormatResult<FourCc> {
        let mut tag = [0u8; 4];
        self.inner
            .read_exact(&mut tag)
            .map_err(|e| self.read_error(e, field))?;
        self.consumed += 4;
        Ok(FourCc(tag))
    }

    pub fn read_guid(&mut self, field: &str) -> FormatResult<[u8; 16]> {
        let mut guid = [0u8; 16];
        self.inner
            .read_exact(&mut guid)
            .map_err(|e| self.read_error(e, field))?;
        self.consumed += 16;
        Ok(guid)
    }

    /// Discards the `len` content bytes of chunk `tag`.
    pub fn skip(&mut self, tag: FourCc, len: u32) -> FormatResult<()> {
        let skipped = io::copy(
            &mut self.inner.by_ref().take(u64::from(len)),
            &mut io::sink(),
        )?;
        self.consumed += skipped;

        if skipped < u64::from(len) {
            return Err(FormatError::malformed(
                self.consumed,
                format!(
                    "'{}' chunk declares {} bytes but the stream ends after {}",
                    tag, len, skipped
                ),
            ));
        }

        Ok(())
    }

    fn read_error(&self, err: io::Error, field: &str) -> FormatError {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            FormatError::malformed(self.consumed, format!("stream ended while reading {}", field))
        } else {
            FormatError::Io(err)
        }
    }
}
