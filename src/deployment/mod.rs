//! Deployment planning against the network address book

pub mod vault;

pub use vault::*;
