use crate::{AbsentFlag, Pack, PresentFlag, Result, WireReader, WireWriter};
use derive_more::{Deref, DerefMut, From};
use std::collections::HashMap;
use std::hash::Hash;

fn put_seq<T: Pack>(items: &[T], w: &mut WireWriter) -> Result<()> {
    w.put_u8(AbsentFlag::Present.to_wire());
    w.put_len(items.len())?;
    T::pack_slice(items, w)
}

fn get_seq<T: Pack + Default>(r: &mut WireReader<'_>) -> Result<Vec<T>> {
    let count = r.get_len()?;
    let mut items: Vec<T> = Vec::new();
    items.resize_with(count, T::default);
    T::unpack_slice(&mut items, r)?;
    Ok(items)
}

fn put_map<K: Pack, V: Pack>(map: &HashMap<K, V>, w: &mut WireWriter) -> Result<()> {
    w.put_u8(AbsentFlag::Present.to_wire());
    w.put_len(map.len())?;
    if w.canonical_maps() {
        // Stage each entry, then order by encoded key bytes so repeated
        // encodes of the same map are byte-identical.
        let mut scratch = WireWriter::with_canonical_maps(true);
        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            key.pack(&mut scratch)?;
            let key_bytes = scratch.take_bytes();
            value.pack(&mut scratch)?;
            entries.push((key_bytes, scratch.take_bytes()));
        }
        entries.sort_unstable();
        for (key_bytes, value_bytes) in &entries {
            w.put_raw(key_bytes);
            w.put_raw(value_bytes);
        }
    } else {
        for (key, value) in map {
            key.pack(w)?;
            value.pack(w)?;
        }
    }
    Ok(())
}

fn get_map<K, V>(r: &mut WireReader<'_>) -> Result<HashMap<K, V>>
where
    K: Pack + Default + Eq + Hash,
    V: Pack + Default,
{
    let count = r.get_len()?;
    let mut map = HashMap::new();
    for _ in 0..count {
        let mut key = K::default();
        key.unpack(r)?;
        let mut value = V::default();
        value.unpack(r)?;
        map.insert(key, value);
    }
    Ok(map)
}

/// Ordered sequence. The plain `Vec` always encodes as present; a decoded
/// absent flag leaves it empty. Use `Option<Vec<T>>` where null and empty
/// must stay distinct.
impl<T: Pack + Default> Pack for Vec<T> {
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        put_seq(self, w)
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        match AbsentFlag::from_wire(r.get_u8()?)? {
            AbsentFlag::Absent => self.clear(),
            AbsentFlag::Present => *self = get_seq(r)?,
        }
        Ok(())
    }
}

/// Nullable ordered sequence.
impl<T: Pack + Default> Pack for Option<Vec<T>> {
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        match self {
            None => {
                w.put_u8(AbsentFlag::Absent.to_wire());
                Ok(())
            }
            Some(items) => put_seq(items, w),
        }
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        match AbsentFlag::from_wire(r.get_u8()?)? {
            AbsentFlag::Absent => *self = None,
            AbsentFlag::Present => *self = Some(get_seq(r)?),
        }
        Ok(())
    }
}

/// Keyed mapping. Entry order on the wire is arbitrary unless the writer is
/// in canonical mode.
impl<K, V> Pack for HashMap<K, V>
where
    K: Pack + Default + Eq + Hash,
    V: Pack + Default,
{
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        put_map(self, w)
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        match AbsentFlag::from_wire(r.get_u8()?)? {
            AbsentFlag::Absent => self.clear(),
            AbsentFlag::Present => *self = get_map(r)?,
        }
        Ok(())
    }
}

/// Nullable keyed mapping.
impl<K, V> Pack for Option<HashMap<K, V>>
where
    K: Pack + Default + Eq + Hash,
    V: Pack + Default,
{
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        match self {
            None => {
                w.put_u8(AbsentFlag::Absent.to_wire());
                Ok(())
            }
            Some(map) => put_map(map, w),
        }
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        match AbsentFlag::from_wire(r.get_u8()?)? {
            AbsentFlag::Absent => *self = None,
            AbsentFlag::Present => *self = Some(get_map(r)?),
        }
        Ok(())
    }
}

/// Fixed array: N element encodings back-to-back, no length prefix.
impl<T: Pack, const N: usize> Pack for [T; N] {
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        T::pack_slice(self, w)
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        T::unpack_slice(self, r)
    }
}

/// Optional reference: present-flag, then the referent encoding.
impl<T: Pack + Default> Pack for Option<Box<T>> {
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        match self {
            None => w.put_u8(PresentFlag::Absent.to_wire()),
            Some(referent) => {
                w.put_u8(PresentFlag::Present.to_wire());
                referent.as_ref().pack(w)?;
            }
        }
        Ok(())
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        match PresentFlag::from_wire(r.get_u8()?)? {
            PresentFlag::Absent => *self = None,
            PresentFlag::Present => {
                let mut referent = Box::new(T::default());
                referent.as_mut().unpack(r)?;
                *self = Some(referent);
            }
        }
        Ok(())
    }
}

/// A field that never reaches the wire: runtime-only state like channels
/// or caches. Encodes nothing; decodes by resetting to `T::default()`.
#[derive(Deref, DerefMut, From, Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct Skip<T>(pub T);

impl<T: Default> Pack for Skip<T> {
    fn pack(&self, _w: &mut WireWriter) -> Result<()> {
        Ok(())
    }

    fn unpack(&mut self, _r: &mut WireReader<'_>) -> Result<()> {
        self.0 = T::default();
        Ok(())
    }
}
