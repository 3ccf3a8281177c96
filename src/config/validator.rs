//! Configuration validation
//!
//! Fail-fast, fixed order: env, service name, binary dir, unit dir, user,
//! host. The first rejected field is reported; later fields are not looked at.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::suggest::closest_match;
use super::types::{Config, RawConfig};
use crate::domain::value_objects::{
    ConfigField, DeployUser, Environment, Host, ServiceName, ValidationError, ValidationReason,
};

/// Validate raw input into a `Config`
pub fn validate(raw: &RawConfig) -> Result<Config, ValidationError> {
    let environment = validate_env(&raw.env).map_err(reject(ConfigField::Env))?;
    let service_name =
        ServiceName::new(raw.service_name.as_str()).map_err(reject(ConfigField::ServiceName))?;
    let binary_dir = validate_dir(&raw.binary_dir).map_err(reject(ConfigField::BinaryDir))?;
    let unit_dir = validate_dir(&raw.unit_dir).map_err(reject(ConfigField::UnitDir))?;
    let user = DeployUser::new(raw.user.as_str()).map_err(reject(ConfigField::User))?;
    let host = Host::new(&raw.host).map_err(reject(ConfigField::Host))?;

    Ok(Config::from_validated(
        environment,
        service_name,
        binary_dir,
        unit_dir,
        user,
        host,
    ))
}

fn reject(field: ConfigField) -> impl Fn(ValidationReason) -> ValidationError {
    move |reason| ValidationError::new(field, reason)
}

/// Parse the environment name, suggesting the closest valid one on a typo
pub fn validate_env(env: &str) -> Result<Environment, ValidationReason> {
    env.parse::<Environment>().map_err(|reason| match reason {
        ValidationReason::InvalidFormat { .. } => ValidationReason::InvalidFormat {
            suggestion: closest_match(env, &Environment::NAMES).map(str::to_string),
        },
        other => other,
    })
}

/// Check that a directory path is set and exists locally.
///
/// Only existence is checked; permission problems surface later when the
/// transfer tool reads the file.
pub fn validate_dir(dir: &str) -> Result<PathBuf, ValidationReason> {
    if dir.is_empty() {
        return Err(ValidationReason::Empty);
    }

    let path = PathBuf::from(dir);
    match std::fs::metadata(&path) {
        Err(err) if err.kind() == ErrorKind::NotFound => {
            Err(ValidationReason::NotFound { path })
        }
        _ => Ok(path),
    }
}
