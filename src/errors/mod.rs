//! Error types for the allowlist, tree builder and address book

pub mod allowlist_error;

pub use allowlist_error::*;
