//! Service Name Value Object
//!
//! The service name ends up in local paths, the remote unit file name, and
//! the remote activation command, so only `[A-Za-z0-9._-]` is accepted.

use std::fmt;

use super::validation::ValidationReason;

/// A validated service name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceName(String);

impl ServiceName {
    /// Maximum length in bytes
    pub const MAX_LEN: usize = 64;

    pub fn new(name: impl Into<String>) -> Result<Self, ValidationReason> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationReason::Empty);
        }
        if name.len() > Self::MAX_LEN {
            return Err(ValidationReason::TooLong { max: Self::MAX_LEN });
        }
        if !name.chars().all(is_service_name_char) {
            return Err(ValidationReason::InvalidCharset);
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the systemd unit for this service (`<name>.service`)
    pub fn unit_file_name(&self) -> String {
        format!("{}.service", self.0)
    }
}

fn is_service_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
