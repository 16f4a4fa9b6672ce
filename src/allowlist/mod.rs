//! Merkle allowlist: hashing primitives, tree builder and on-chain style registry

pub mod hashing;
pub mod tree;
pub mod registry;

pub use hashing::*;
pub use tree::*;
pub use registry::*;
