//! Deploy user value object - the remote login name

use std::fmt;

use super::validation::ValidationReason;

/// A validated remote user name (`[A-Za-z0-9_-]+`)
///
/// Unlike `ServiceName`, dots are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeployUser(String);

impl DeployUser {
    pub fn new(user: impl Into<String>) -> Result<Self, ValidationReason> {
        let user = user.into();

        if user.is_empty() {
            return Err(ValidationReason::Empty);
        }
        if !user
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
        {
            return Err(ValidationReason::InvalidCharset);
        }

        Ok(Self(user))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeployUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
