//! # Wire format
//!
//! All multi-byte scalars are big-endian. Producer and consumer must share
//! the schema: the stream carries no field names and no type tags, except
//! inside dynamic fields.
//!
//! ```text
//! bool:               u8 (0x00 = false, 0x01 = true; readers accept any non-zero as true)
//! iN / uN:            N/8 bytes, big-endian two's-complement
//! isize / usize:      8 bytes, big-endian (canonicalized regardless of host word)
//! f32 / f64:          4/8 bytes, big-endian IEEE-754 bit pattern
//! string:             i32 byte length, then that many UTF-8 bytes
//!
//! record:             field_0 ... field_n in declared order, no envelope
//! fixed array [T; N]: element_0 ... element_(N-1), no prefix
//!
//! reference:          present_flag: u8,        // 0x00 = null, 0x01 = payload follows
//!                     referent,                // only when present
//!
//! sequence:           absent_flag: u8,         // 0x00 = payload follows, 0x01 = null
//!                     count: i32,              // only when present
//!                     element_0 ... element_(count-1),
//!                     // byte sequences: count raw bytes, no per-element framing
//!
//! mapping:            absent_flag: u8,
//!                     count: i32,
//!                     (key, value) * count,    // arbitrary order unless canonical mode
//!
//! dynamic field:      present_flag: u8,
//!                     was_boxed: u8,           // only when present
//!                     type_key: string,
//!                     concrete record encoding
//! ```
//!
//! Flag bytes are strict: a present/absent flag outside `{0x00, 0x01}`
//! decodes as [`PackError::Corrupt`](crate::PackError::Corrupt).

mod flag;
mod reader;
mod source;
mod writer;

pub use flag::*;
pub use reader::*;
pub use source::*;
pub use writer::*;
