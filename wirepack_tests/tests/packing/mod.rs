pub mod helpers;

mod concurrent;
mod roundtrip;
