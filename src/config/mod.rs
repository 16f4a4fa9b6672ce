//! Configuration management for the allowlist tooling

pub mod settings;

pub use settings::*;

use lazy_static::lazy_static;

lazy_static! {
    // Malformed settings are kept as the rendered error so startup can report them
    pub static ref CONFIG: Result<Config, String> = Config::load().map_err(|e| e.to_string());
}
