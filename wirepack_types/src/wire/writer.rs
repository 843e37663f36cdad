use crate::{PackError, Result};

/// The primitive encoder. Owns the growable scratch buffer of one codec
/// instance; walkers call `put_*` for leaves and [`take_bytes`] when the
/// value is fully written.
///
/// [`take_bytes`]: WireWriter::take_bytes
pub struct WireWriter {
    buf: Vec<u8>,
    canonical_maps: bool,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::with_canonical_maps(false)
    }

    /// A writer whose mapping entries are sorted by encoded key bytes, for
    /// reproducible output.
    pub fn with_canonical_maps(canonical_maps: bool) -> Self {
        Self {
            buf: Vec::new(),
            canonical_maps,
        }
    }

    pub fn canonical_maps(&self) -> bool {
        self.canonical_maps
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// A fresh owned copy of everything written so far. The scratch buffer
    /// is cleared (capacity retained) so the writer can be reused at once.
    pub fn take_bytes(&mut self) -> Vec<u8> {
        let out = self.buf.clone();
        self.buf.clear();
        out
    }

    /// Discards everything written so far.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    pub fn put_bool(&mut self, v: bool) {
        self.buf.push(v as u8);
    }

    pub fn put_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn put_i8(&mut self, v: i8) {
        self.buf.push(v as u8);
    }

    pub fn put_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_i16(&mut self, v: i16) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Platform-sized ints are canonicalized to 8 wire bytes regardless of
    /// the host word.
    pub fn put_usize(&mut self, v: usize) {
        self.put_u64(v as u64);
    }

    pub fn put_isize(&mut self, v: isize) {
        self.put_i64(v as i64);
    }

    pub fn put_f32(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn put_raw(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// An `i32` length prefix for strings, sequences, and mappings.
    pub fn put_len(&mut self, len: usize) -> Result<()> {
        let len = i32::try_from(len).map_err(|_| {
            PackError::Corrupt(format!("length {len} exceeds the int32 wire range"))
        })?;
        self.put_i32(len);
        Ok(())
    }

    pub fn put_str(&mut self, s: &str) -> Result<()> {
        self.put_len(s.len())?;
        self.put_raw(s.as_bytes());
        Ok(())
    }
}

impl Default for WireWriter {
    fn default() -> Self {
        Self::new()
    }
}
