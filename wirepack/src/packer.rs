use crate::{ByteSource, Pack, ReadSource, Record, Result, SliceSource, WireReader, WireWriter};
use std::io::Read;

/// One codec instance: a walker entry point plus its scratch buffer.
///
/// Usable on its own; [`PackerPool`](crate::PackerPool) holds a bounded set
/// of these for concurrent callers.
pub struct Packer {
    w: WireWriter,
}

impl Packer {
    pub fn new() -> Self {
        Self {
            w: WireWriter::new(),
        }
    }

    /// A packer whose mapping entries are sorted by encoded key bytes, for
    /// reproducible output (hashing, fingerprinting).
    pub fn new_canonical() -> Self {
        Self {
            w: WireWriter::with_canonical_maps(true),
        }
    }

    /// Encodes `value` into a fresh owned byte vector. The scratch buffer
    /// is reset afterwards, also on error.
    pub fn pack<T: Pack + ?Sized>(&mut self, value: &T) -> Result<Vec<u8>> {
        match value.pack(&mut self.w) {
            Ok(()) => Ok(self.w.take_bytes()),
            Err(e) => {
                self.w.reset();
                Err(e)
            }
        }
    }

    /// Decodes `data` into `dest`, mutating its fields in place in declared
    /// order. On error the destination is partially mutated; discard it.
    pub fn unpack<T: Record>(&mut self, data: &[u8], dest: &mut T) -> Result<()> {
        let mut src = SliceSource::new(data);
        self.unpack_from_source(&mut src, dest)
    }

    pub fn unpack_from_source<T: Record>(
        &mut self,
        src: &mut dyn ByteSource,
        dest: &mut T,
    ) -> Result<()> {
        dest.unpack(&mut WireReader::new(src))
    }

    /// Decodes from a streaming reader, wrapped into a byte-oriented
    /// source.
    pub fn unpack_from_reader<T: Record>(&mut self, reader: impl Read, dest: &mut T) -> Result<()> {
        let mut src = ReadSource::new(reader);
        self.unpack_from_source(&mut src, dest)
    }
}

impl Default for Packer {
    fn default() -> Self {
        Self::new()
    }
}
