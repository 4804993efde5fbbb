// src/raw_data/cursor.rs
use crate::error::{Result, SxfError};
use crate::utils::decode_cp1252;
use byteorder::{ByteOrder, LittleEndian};
use bytes::Bytes;

/// Sequential little-endian reader over an immutable byte buffer.
///
/// All SXF records are decoded through this type. Every read checks the
/// remaining length first and fails with [`SxfError::UnexpectedEof`] rather
/// than returning short data.
///
/// Offsets are absolute file offsets: a cursor created with
/// [`ByteCursor::sub_cursor`] reports positions relative to the start of the
/// original buffer, so error messages always point into the file.
///
/// # Example
///
/// ```
/// use sxf_rs::raw_data::ByteCursor;
///
/// let mut cursor = ByteCursor::new(vec![1u8, 0, 0, 0, 0xff]);
/// assert_eq!(cursor.read_u32().unwrap(), 1);
/// assert_eq!(cursor.read_u8().unwrap(), 0xff);
/// assert!(cursor.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ByteCursor {
    buf: Bytes,
    pos: usize,
    origin: usize,
}

impl ByteCursor {
    pub fn new(buf: impl Into<Bytes>) -> Self {
        ByteCursor {
            buf: buf.into(),
            pos: 0,
            origin: 0,
        }
    }

    /// Current absolute offset.
    pub fn position(&self) -> usize {
        self.origin + self.pos
    }

    /// Total length of the window this cursor reads from.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Move to an absolute offset. Seeking to the very end is allowed.
    pub fn seek_abs(&mut self, pos: usize) -> Result<()> {
        let end = self.origin + self.buf.len();
        if pos < self.origin || pos > end {
            return Err(SxfError::UnexpectedEof {
                offset: pos,
                requested: 0,
            });
        }
        self.pos = pos - self.origin;
        Ok(())
    }

    pub fn seek_rel(&mut self, delta: i64) -> Result<()> {
        let out_of_range = SxfError::UnexpectedEof {
            offset: self.position(),
            requested: usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX),
        };
        let target = match (self.pos as i64).checked_add(delta) {
            Some(target) if target >= 0 && target as u64 <= self.buf.len() as u64 => target,
            _ => return Err(out_of_range),
        };
        self.pos = target as usize;
        Ok(())
    }

    /// Fail early if fewer than `n` bytes are left.
    pub fn ensure(&self, n: usize) -> Result<()> {
        if n > self.remaining() {
            return Err(SxfError::UnexpectedEof {
                offset: self.position(),
                requested: n,
            });
        }
        Ok(())
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.pos += n;
        Ok(())
    }

    fn take(&mut self, n: usize) -> Result<&[u8]> {
        self.ensure(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..start + n])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.take(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4)?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.take(4)?))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8)?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.take(4)?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(LittleEndian::read_f64(self.take(8)?))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read exactly `n` bytes as a zero-copy slice of the underlying buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.ensure(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(self.buf.slice(start..start + n))
    }

    pub fn read_cp1252_string(&mut self, len: usize) -> Result<String> {
        Ok(decode_cp1252(self.take(len)?))
    }

    /// Split off the next `n` bytes as an independent cursor and advance
    /// past them.
    pub fn sub_cursor(&mut self, n: usize) -> Result<ByteCursor> {
        let origin = self.position();
        let buf = self.read_bytes(n)?;
        Ok(ByteCursor {
            buf,
            pos: 0,
            origin,
        })
    }

    fn array_len(&self, count: usize, width: usize) -> Result<usize> {
        let byte_count = count.checked_mul(width).ok_or(SxfError::UnexpectedEof {
            offset: self.position(),
            requested: usize::MAX,
        })?;
        self.ensure(byte_count)?;
        Ok(byte_count)
    }

    pub fn read_u16_vec(&mut self, count: usize) -> Result<Vec<u16>> {
        let byte_count = self.array_len(count, 2)?;
        let mut out = vec![0u16; count];
        LittleEndian::read_u16_into(self.take(byte_count)?, &mut out);
        Ok(out)
    }

    pub fn read_u32_vec(&mut self, count: usize) -> Result<Vec<u32>> {
        let byte_count = self.array_len(count, 4)?;
        let mut out = vec![0u32; count];
        LittleEndian::read_u32_into(self.take(byte_count)?, &mut out);
        Ok(out)
    }

    pub fn read_i32_vec(&mut self, count: usize) -> Result<Vec<i32>> {
        let byte_count = self.array_len(count, 4)?;
        let mut out = vec![0i32; count];
        LittleEndian::read_i32_into(self.take(byte_count)?, &mut out);
        Ok(out)
    }

    pub fn read_f32_vec(&mut self, count: usize) -> Result<Vec<f32>> {
        let byte_count = self.array_len(count, 4)?;
        let mut out = vec![0f32; count];
        LittleEndian::read_f32_into(self.take(byte_count)?, &mut out);
        Ok(out)
    }

    pub fn read_f64_vec(&mut self, count: usize) -> Result<Vec<f64>> {
        let byte_count = self.array_len(count, 8)?;
        let mut out = vec![0f64; count];
        LittleEndian::read_f64_into(self.take(byte_count)?, &mut out);
        Ok(out)
    }
}
