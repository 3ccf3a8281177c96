//! Validation error kinds
//!
//! Every rejected input maps to exactly one (field, reason) pair so callers
//! can branch on the kind instead of matching message strings.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration field, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigField {
    Env,
    ServiceName,
    BinaryDir,
    UnitDir,
    User,
    Host,
}

impl ConfigField {
    /// All fields in the fixed order they are validated
    pub const ALL: [ConfigField; 6] = [
        ConfigField::Env,
        ConfigField::ServiceName,
        ConfigField::BinaryDir,
        ConfigField::UnitDir,
        ConfigField::User,
        ConfigField::Host,
    ];

    /// Human-readable name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::Env => "env",
            ConfigField::ServiceName => "service name",
            ConfigField::BinaryDir => "binary dir",
            ConfigField::UnitDir => "unit dir",
            ConfigField::User => "user",
            ConfigField::Host => "host",
        }
    }

    /// Long CLI flag that sets this field
    pub fn flag(&self) -> &'static str {
        match self {
            ConfigField::Env => "--env",
            ConfigField::ServiceName => "--service-name",
            ConfigField::BinaryDir => "--binary-dir",
            ConfigField::UnitDir => "--unit-dir",
            ConfigField::User => "--user",
            ConfigField::Host => "--host",
        }
    }

    /// Environment / `.env` key that sets this field
    pub fn env_key(&self) -> &'static str {
        match self {
            ConfigField::Env => "ENV",
            ConfigField::ServiceName => "SERVICE_NAME",
            ConfigField::BinaryDir => "BINARY_DIR",
            ConfigField::UnitDir => "UNIT_DIR",
            ConfigField::User => "USER",
            ConfigField::Host => "HOST",
        }
    }

    /// Stable identifier for machine-readable output
    pub fn id(&self) -> &'static str {
        match self {
            ConfigField::Env => "env",
            ConfigField::ServiceName => "service_name",
            ConfigField::BinaryDir => "binary_dir",
            ConfigField::UnitDir => "unit_dir",
            ConfigField::User => "user",
            ConfigField::Host => "host",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReason {
    /// Value is empty
    Empty,
    /// Value exceeds the maximum length
    TooLong { max: usize },
    /// Value contains a character outside the field's allow-list
    InvalidCharset,
    /// Path does not exist on the local filesystem
    NotFound { path: PathBuf },
    /// Value is not one of the accepted forms
    InvalidFormat { suggestion: Option<String> },
}

impl ValidationReason {
    /// Stable identifier for machine-readable output
    pub fn id(&self) -> &'static str {
        match self {
            ValidationReason::Empty => "empty",
            ValidationReason::TooLong { .. } => "too_long",
            ValidationReason::InvalidCharset => "invalid_charset",
            ValidationReason::NotFound { .. } => "not_found",
            ValidationReason::InvalidFormat { .. } => "invalid_format",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationReason::Empty => write!(f, "cannot be empty"),
            ValidationReason::TooLong { max } => {
                write!(f, "is too long (max {} characters)", max)
            }
            ValidationReason::InvalidCharset => write!(f, "contains invalid characters"),
            ValidationReason::NotFound { path } => {
                write!(f, "does not exist: {}", path.display())
            }
            ValidationReason::InvalidFormat { suggestion } => {
                write!(f, "is not valid")?;
                if let Some(suggestion) = suggestion {
                    write!(f, ". Did you mean '{}'?", suggestion)?;
                }
                Ok(())
            }
        }
    }
}

/// A rejected configuration field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field} {reason}")]
pub struct ValidationError {
    pub field: ConfigField,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: ConfigField, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}
