//! Configuration loading
//!
//! Layering, highest priority first:
//! 1. CLI flags
//! 2. `.env` overlay file
//! 3. Process environment
//! 4. Built-in defaults (`ENV=production`)
//!
//! The overlay is returned as a map and never written into the process
//! environment.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use super::types::{ConfigOverrides, RawConfig};
use crate::domain::value_objects::{ConfigField, Environment};
use crate::error::{BlitzError, BlitzResult};

/// Overlay file read when no `--env-file` is given
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Parse `key=value` lines.
///
/// Lines starting with `#` or without `=` are skipped. Key and value are
/// trimmed; the line is split at the first `=`. Later assignments win.
pub fn parse_overlay(content: &str) -> HashMap<String, String> {
    let mut overlay = HashMap::new();

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        overlay.insert(key.trim().to_string(), value.trim().to_string());
    }

    overlay
}

/// Load the overlay file at `path`.
///
/// A missing file yields an empty overlay; other read errors are reported.
pub fn load_overlay(path: &Path) -> BlitzResult<HashMap<String, String>> {
    match read_overlay(path) {
        Err(BlitzError::EnvFile { source, .. }) if source.kind() == ErrorKind::NotFound => {
            Ok(HashMap::new())
        }
        other => other,
    }
}

/// Load an overlay file that must exist (an explicit `--env-file`)
pub fn read_overlay(path: &Path) -> BlitzResult<HashMap<String, String>> {
    std::fs::read_to_string(path)
        .map(|content| parse_overlay(&content))
        .map_err(|source| BlitzError::EnvFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Merge flags, overlay, and environment into a `RawConfig`.
///
/// Empty values in the overlay or environment count as unset, so they fall
/// through to the next layer. An explicitly passed empty flag is kept and
/// rejected by validation.
pub fn resolve<F>(
    overrides: &ConfigOverrides,
    overlay: &HashMap<String, String>,
    get_env: F,
) -> RawConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut raw = RawConfig::default();

    for field in ConfigField::ALL {
        let key = field.env_key();
        let value = overrides
            .get(field)
            .map(str::to_string)
            .or_else(|| overlay.get(key).filter(|v| !v.is_empty()).cloned())
            .or_else(|| get_env(key).filter(|v| !v.is_empty()))
            .unwrap_or_else(|| default_for(field).to_string());
        raw.set(field, value);
    }

    raw
}

/// Resolve against the real process environment
pub fn resolve_from_process(
    overrides: &ConfigOverrides,
    overlay: &HashMap<String, String>,
) -> RawConfig {
    resolve(overrides, overlay, |key| std::env::var(key).ok())
}

fn default_for(field: ConfigField) -> &'static str {
    match field {
        ConfigField::Env => Environment::default().as_str(),
        _ => "",
    }
}
