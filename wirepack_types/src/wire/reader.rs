use crate::{ByteSource, PackError, Result};
use std::mem;

/// The primitive decoder: `get_*` mirrors of every [`WireWriter`] `put_*`,
/// reading from a borrowed [`ByteSource`].
///
/// [`WireWriter`]: crate::WireWriter
pub struct WireReader<'a> {
    src: &'a mut dyn ByteSource,
}

macro_rules! get_scalar {
    ($($fn_name:ident -> $ty:ty;)+) => {$(
        pub fn $fn_name(&mut self) -> Result<$ty> {
            let mut buf = [0u8; mem::size_of::<$ty>()];
            self.src.read_exact(&mut buf)?;
            Ok(<$ty>::from_be_bytes(buf))
        }
    )+};
}

impl<'a> WireReader<'a> {
    pub fn new(src: &'a mut dyn ByteSource) -> Self {
        Self { src }
    }

    /// Any non-zero byte reads as true.
    pub fn get_bool(&mut self) -> Result<bool> {
        Ok(self.src.read_byte()? != 0)
    }

    pub fn get_u8(&mut self) -> Result<u8> {
        self.src.read_byte()
    }

    pub fn get_i8(&mut self) -> Result<i8> {
        Ok(self.src.read_byte()? as i8)
    }

    get_scalar! {
        get_u16 -> u16;
        get_i16 -> i16;
        get_u32 -> u32;
        get_i32 -> i32;
        get_u64 -> u64;
        get_i64 -> i64;
        get_f32 -> f32;
        get_f64 -> f64;
    }

    /// 8 wire bytes; fails on a host whose word cannot hold the value.
    pub fn get_usize(&mut self) -> Result<usize> {
        let v = self.get_u64()?;
        usize::try_from(v)
            .map_err(|_| PackError::UnsupportedKind("platform uint wider than the host word"))
    }

    pub fn get_isize(&mut self) -> Result<isize> {
        let v = self.get_i64()?;
        isize::try_from(v)
            .map_err(|_| PackError::UnsupportedKind("platform int wider than the host word"))
    }

    /// An `i32` length prefix; negative is a corrupt stream.
    pub fn get_len(&mut self) -> Result<usize> {
        let len = self.get_i32()?;
        if len < 0 {
            return Err(PackError::Corrupt(format!("negative length prefix {len}")));
        }
        Ok(len as usize)
    }

    pub fn get_str(&mut self) -> Result<String> {
        let len = self.get_len()?;
        let bytes = self.get_raw(len)?;
        String::from_utf8(bytes)
            .map_err(|e| PackError::Corrupt(format!("string is not valid UTF-8: {e}")))
    }

    pub fn get_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut bytes = vec![0u8; len];
        self.src.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub fn get_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.src.read_exact(buf)
    }
}
