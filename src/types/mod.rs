//! Core data types and structures

pub mod addresses;
pub mod snapshot;
pub mod plan;

pub use addresses::*;
pub use snapshot::*;
pub use plan::*;
