mod error;
mod wire;

pub use error::*;
pub use wire::*;
