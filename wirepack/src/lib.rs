//! Schema-shared binary serialization.
//!
//! A value's Rust type is its schema: the [`Pack`] impl of each field walks
//! the value in declared order, calling the primitive codec
//! ([`WireWriter`] / [`WireReader`]) for leaves. Producer and consumer must
//! hold the same record definitions in the same field order; the stream
//! itself carries no field names and no type tags, except inside
//! [`DynField`] slots, which are resolved by type key through the
//! process-wide [`registry`].
//!
//! [`record!`](crate::record) declares a record and derives its walk.
//! [`PackerPool`] multiplexes reusable [`Packer`] instances (each owning
//! one scratch buffer) across concurrent callers.

mod dynamic;
mod pack;
mod packer;
mod pool;
mod record;
pub mod registry;

pub use dynamic::*;
pub use pack::*;
pub use packer::*;
pub use pool::*;
pub use record::*;

pub use wirepack_types::{
    AbsentFlag, ByteSource, PackError, PresentFlag, ReadSource, Result, SliceSource, WireReader,
    WireWriter,
};
