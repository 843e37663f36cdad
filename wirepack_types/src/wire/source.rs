use crate::{PackError, Result};
use std::io::{ErrorKind, Read};

/// The decoder's capability over its input: exact multi-byte reads plus
/// single-byte reads.
pub trait ByteSource {
    fn read_byte(&mut self) -> Result<u8>;
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// An in-memory byte source over a borrowed slice.
pub struct SliceSource<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

impl<'a> From<&'a [u8]> for SliceSource<'a> {
    fn from(buf: &'a [u8]) -> Self {
        Self::new(buf)
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_byte(&mut self) -> Result<u8> {
        if self.pos < self.buf.len() {
            let byte = self.buf[self.pos];
            self.pos += 1;
            Ok(byte)
        } else {
            Err(PackError::EndOfStream)
        }
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        if self.remaining() < buf.len() {
            return Err(PackError::EndOfStream);
        }
        buf.copy_from_slice(&self.buf[self.pos..self.pos + buf.len()]);
        self.pos += buf.len();
        Ok(())
    }
}

/// Adapter turning any [`Read`] stream into a byte-oriented source.
pub struct ReadSource<R: Read> {
    r: R,
}

impl<R: Read> ReadSource<R> {
    pub fn new(r: R) -> Self {
        Self { r }
    }
}

impl<R: Read> From<R> for ReadSource<R> {
    fn from(r: R) -> Self {
        Self::new(r)
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        match self.r.read_exact(buf) {
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(PackError::EndOfStream),
            Err(e) => Err(PackError::Io(e)),
            Ok(()) => Ok(()),
        }
    }
}
