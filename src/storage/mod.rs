//! Data persistence and file operations

pub mod allowlist;
pub mod snapshots;
pub mod deployments;

pub use allowlist::*;
pub use snapshots::*;
pub use deployments::*;
