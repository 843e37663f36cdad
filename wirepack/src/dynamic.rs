use crate::{registry, Pack, PackError, PresentFlag, Record, Result, WireReader, WireWriter};
use std::any::{self, Any};
use std::fmt;

/// Object-safe view of a [`Record`], for slots whose concrete type is only
/// known at runtime. Blanket-implemented; user code never implements this.
pub trait DynRecord: Any + Send {
    /// `module_path::TypeName`, the key the [`registry`] resolves at decode
    /// time.
    fn type_key(&self) -> &'static str;

    fn pack_dyn(&self, w: &mut WireWriter) -> Result<()>;
    fn unpack_dyn(&mut self, r: &mut WireReader<'_>) -> Result<()>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Record> DynRecord for T {
    fn type_key(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn pack_dyn(&self, w: &mut WireWriter) -> Result<()> {
        self.pack(w)
    }

    fn unpack_dyn(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        self.unpack(r)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A polymorphic slot: holds any registered record, and remembers whether
/// the producer held it boxed so a re-encode is byte-identical.
///
/// Field type is `Option<DynField>`; wire shape: present-flag, was-boxed
/// flag, length-prefixed type key, then the concrete record's encoding.
/// Decoding fails with [`PackError::UnknownType`] when the key was never
/// [`registry::register`]ed.
pub struct DynField {
    boxed: bool,
    value: Box<dyn DynRecord>,
}

impl DynField {
    pub fn new<T: Record>(value: T) -> Self {
        Self {
            boxed: false,
            value: Box::new(value),
        }
    }

    /// Same payload, but the was-boxed wire flag is set, marking a value
    /// the producer held through a pointer.
    pub fn new_boxed<T: Record>(value: T) -> Self {
        Self {
            boxed: true,
            value: Box::new(value),
        }
    }

    pub fn was_boxed(&self) -> bool {
        self.boxed
    }

    pub fn type_key(&self) -> &'static str {
        self.value.type_key()
    }

    pub fn is<T: Record>(&self) -> bool {
        self.value.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Record>(&mut self) -> Option<&mut T> {
        self.value.as_any_mut().downcast_mut::<T>()
    }

    /// Takes the concrete record out, or [`PackError::InvalidTarget`] if
    /// the slot holds some other type.
    pub fn downcast<T: Record>(self) -> Result<Box<T>> {
        self.value
            .into_any()
            .downcast::<T>()
            .map_err(|_| PackError::InvalidTarget {
                expected: any::type_name::<T>(),
            })
    }
}

impl PartialEq for DynField {
    fn eq(&self, other: &Self) -> bool {
        if self.boxed != other.boxed || self.type_key() != other.type_key() {
            return false;
        }
        let mut a = WireWriter::new();
        let mut b = WireWriter::new();
        match (self.value.pack_dyn(&mut a), other.value.pack_dyn(&mut b)) {
            (Ok(()), Ok(())) => a.take_bytes() == b.take_bytes(),
            _ => false,
        }
    }
}

impl fmt::Debug for DynField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynField")
            .field("type_key", &self.type_key())
            .field("boxed", &self.boxed)
            .finish()
    }
}

impl Pack for Option<DynField> {
    fn pack(&self, w: &mut WireWriter) -> Result<()> {
        match self {
            None => w.put_u8(PresentFlag::Absent.to_wire()),
            Some(field) => {
                w.put_u8(PresentFlag::Present.to_wire());
                w.put_bool(field.boxed);
                w.put_str(field.type_key())?;
                field.value.pack_dyn(w)?;
            }
        }
        Ok(())
    }

    fn unpack(&mut self, r: &mut WireReader<'_>) -> Result<()> {
        match PresentFlag::from_wire(r.get_u8()?)? {
            PresentFlag::Absent => *self = None,
            PresentFlag::Present => {
                let boxed = r.get_bool()?;
                let key = r.get_str()?;
                let mut value = registry::resolve(&key)?;
                value.unpack_dyn(r)?;
                *self = Some(DynField { boxed, value });
            }
        }
        Ok(())
    }
}
