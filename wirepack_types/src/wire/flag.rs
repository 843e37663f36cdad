use crate::{PackError, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

/// Leading byte for optional references and dynamic fields.
/// `1` means a payload follows.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum PresentFlag {
    Absent = 0,
    Present = 1,
}

/// Leading byte for sequences and mappings. Inverted sense w.r.t.
/// [`PresentFlag`]: `1` means the container is null.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum AbsentFlag {
    Present = 0,
    Absent = 1,
}

impl PresentFlag {
    pub fn to_wire(self) -> u8 {
        self.to_u8().unwrap()
    }
    pub fn from_wire(byte: u8) -> Result<Self> {
        Self::from_u8(byte).ok_or_else(|| {
            PackError::Corrupt(format!("present-flag byte 0x{byte:02x} is outside {{0, 1}}"))
        })
    }
}

impl AbsentFlag {
    pub fn to_wire(self) -> u8 {
        self.to_u8().unwrap()
    }
    pub fn from_wire(byte: u8) -> Result<Self> {
        Self::from_u8(byte).ok_or_else(|| {
            PackError::Corrupt(format!("absent-flag byte 0x{byte:02x} is outside {{0, 1}}"))
        })
    }
}
