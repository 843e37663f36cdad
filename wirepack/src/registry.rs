//! Process-wide mapping from type key to record allocator, consulted when a
//! dynamic field is decoded. Write-rarely (program init), read-often.

use crate::{DynRecord, PackError, Record, Result};
use std::any;
use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};
use tracing::debug;

type Allocator = fn() -> Box<dyn DynRecord>;

fn table() -> &'static RwLock<HashMap<String, Allocator>> {
    static TABLE: OnceLock<RwLock<HashMap<String, Allocator>>> = OnceLock::new();
    TABLE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Makes `T` decodable out of dynamic fields, under the key
/// `any::type_name::<T>()`. Idempotent; the last registration for a key
/// wins silently. Registrations live for the process lifetime.
pub fn register<T: Record>() {
    let key = any::type_name::<T>();
    debug!(key, "registering record type");
    let allocator: Allocator = || Box::new(T::default());
    let mut table = table().write().expect("registry lock poisoned");
    table.insert(key.to_string(), allocator);
}

/// [`register`] spelled with a sample value instead of a turbofish.
pub fn register_value<T: Record>(_sample: &T) {
    register::<T>();
}

/// Allocates a fresh instance of the type registered under `key`.
pub fn resolve(key: &str) -> Result<Box<dyn DynRecord>> {
    let table = table().read().expect("registry lock poisoned");
    match table.get(key) {
        Some(allocator) => Ok(allocator()),
        None => Err(PackError::UnknownType(key.to_string())),
    }
}
