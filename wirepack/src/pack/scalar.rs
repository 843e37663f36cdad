use crate::{Pack, Result, WireReader, WireWriter};

macro_rules! pack_scalar {
    ($($ty:ty => $put:ident, $get:ident;)+) => {$(
        impl Pack for $ty {
            fn pack(&self, w: &mut WireWriter) -> Result<()> {
                w.$put(*self);
                Ok(())
            }
            fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
                *self = r.$get()?;
                Ok(())
            }
        }
    )+};
}

pack_scalar! {
    bool => put_bool, get_bool;
    i8 => put_i8, get_i8;
    i16 => put_i16, get_i16;
    i32 => put_i32, get_i32;
    i64 => put_i64, get_i64;
    u16 => put_u16, get_u16;
    u32 => put_u32, get_u32;
    u64 => put_u64, get_u64;
    isize => put_isize, get_isize;
    usize => put_usize, get_usize;
    f32 => put_f32, get_f32;
    f64 => put_f64, get_f64;
}

impl Pack for u8 {
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        w.put_u8(*self);
        Ok(())
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        *self = r.get_u8()?;
        Ok(())
    }

    fn pack_slice(items: &[Self], w: &mut WireWriter) -> Result<()> {
        w.put_raw(items);
        Ok(())
    }

    fn unpack_slice(items: &mut [Self], r: &mut WireReader<'_>) -> Result<()> {
        r.get_exact(items)
    }
}

impl Pack for String {
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        w.put_str(self)
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        *self = r.get_str()?;
        Ok(())
    }
}
