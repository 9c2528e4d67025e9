//! Hashing and nonce helpers for the Supernote protocol.

pub mod hash;
pub mod random;

pub use hash::*;
pub use random::*;
