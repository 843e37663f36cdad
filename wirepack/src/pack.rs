use crate::{Result, WireReader, WireWriter};

mod container;
mod scalar;

pub use container::*;

/// The walker's per-kind dispatch: how one value of one field kind gets on
/// and off the wire.
///
/// Impls exist for every recognized kind: scalars, `String`, `[T; N]`,
/// `Vec<T>` / `Option<Vec<T>>`, `HashMap<K, V>` / `Option<HashMap<K, V>>`,
/// `Option<Box<T>>`, `Option<DynField>`, and [`Skip<T>`](crate::Skip).
/// Records get their impl from [`record!`](crate::record) — or by hand,
/// which is the custom-codec hook: a manual impl replaces the generated
/// walk entirely and frames itself (no envelope is added around it).
pub trait Pack {
    fn pack(&self, w: &mut WireWriter) -> Result<()>;
    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()>;

    /// Element-slice fast path for sequences and fixed arrays. `u8`
    /// overrides this to move raw bytes, which is also the wire rule for
    /// byte sequences (no per-element framing).
    fn pack_slice(items: &[Self], w: &mut WireWriter) -> Result<()>
    where
        Self: Sized,
    {
        for item in items {
            item.pack(w)?;
        }
        Ok(())
    }

    fn unpack_slice(items: &mut [Self], r: &mut WireReader<'_>) -> Result<()>
    where
        Self: Sized,
    {
        for item in items {
            item.unpack(r)?;
        }
        Ok(())
    }
}
