//! Configuration module for Blitz
//!
//! Turns untrusted string input into a validated `Config`:
//! 1. CLI flags (highest priority)
//! 2. `.env` overlay (`key=value` lines)
//! 3. Environment variables (`ENV`, `SERVICE_NAME`, ...)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod suggest;
mod types;
mod validator;

pub use loader::{
    load_overlay, parse_overlay, read_overlay, resolve, resolve_from_process, DEFAULT_ENV_FILE,
};
pub use suggest::{closest_match, levenshtein};
pub use types::{Config, ConfigOverrides, RawConfig};
pub use validator::{validate, validate_dir, validate_env};

use std::path::Path;

use crate::error::BlitzResult;

impl Config {
    /// Load and validate configuration from all layers.
    ///
    /// An explicit `env_file` must exist; otherwise `.env` in the working
    /// directory is read when present.
    pub fn load(overrides: &ConfigOverrides, env_file: Option<&Path>) -> BlitzResult<Config> {
        let overlay = match env_file {
            Some(path) => read_overlay(path)?,
            None => load_overlay(Path::new(DEFAULT_ENV_FILE))?,
        };
        let raw = resolve_from_process(overrides, &overlay);
        Ok(validate(&raw)?)
    }
}
