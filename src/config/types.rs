//! Configuration types
//!
//! - `RawConfig`: the flat bag of six strings assembled from flags, the
//!   `.env` overlay, and the process environment. Untrusted.
//! - `ConfigOverrides`: values given explicitly on the command line.
//! - `Config`: the validated result. Only `validate` can build one.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{
    ConfigField, DeployUser, DeploymentTarget, Environment, Host, RemoteAddress, ServiceName,
};

/// Unvalidated configuration input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub env: String,
    pub service_name: String,
    pub binary_dir: String,
    pub unit_dir: String,
    pub user: String,
    pub host: String,
}

impl RawConfig {
    /// Raw value of `field`
    pub fn get(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Env => &self.env,
            ConfigField::ServiceName => &self.service_name,
            ConfigField::BinaryDir => &self.binary_dir,
            ConfigField::UnitDir => &self.unit_dir,
            ConfigField::User => &self.user,
            ConfigField::Host => &self.host,
        }
    }

    pub fn set(&mut self, field: ConfigField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ConfigField::Env => self.env = value,
            ConfigField::ServiceName => self.service_name = value,
            ConfigField::BinaryDir => self.binary_dir = value,
            ConfigField::UnitDir => self.unit_dir = value,
            ConfigField::User => self.user = value,
            ConfigField::Host => self.host = value,
        }
    }
}

/// Values passed explicitly as CLI flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub env: Option<String>,
    pub service_name: Option<String>,
    pub binary_dir: Option<String>,
    pub unit_dir: Option<String>,
    pub user: Option<String>,
    pub host: Option<String>,
}

impl ConfigOverrides {
    pub fn get(&self, field: ConfigField) -> Option<&str> {
        match field {
            ConfigField::Env => self.env.as_deref(),
            ConfigField::ServiceName => self.service_name.as_deref(),
            ConfigField::BinaryDir => self.binary_dir.as_deref(),
            ConfigField::UnitDir => self.unit_dir.as_deref(),
            ConfigField::User => self.user.as_deref(),
            ConfigField::Host => self.host.as_deref(),
        }
    }
}

/// Validated deploy configuration
///
/// Immutable once built; every field has passed its allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    environment: Environment,
    service_name: ServiceName,
    binary_dir: PathBuf,
    unit_dir: PathBuf,
    user: DeployUser,
    host: Host,
}

impl Config {
    pub(crate) fn from_validated(
        environment: Environment,
        service_name: ServiceName,
        binary_dir: PathBuf,
        unit_dir: PathBuf,
        user: DeployUser,
        host: Host,
    ) -> Self {
        Self {
            environment,
            service_name,
            binary_dir,
            unit_dir,
            user,
            host,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn service_name(&self) -> &ServiceName {
        &self.service_name
    }

    pub fn binary_dir(&self) -> &Path {
        &self.binary_dir
    }

    pub fn unit_dir(&self) -> &Path {
        &self.unit_dir
    }

    pub fn user(&self) -> &DeployUser {
        &self.user
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Derive the artifact paths and remote address for this deploy
    pub fn deployment_target(&self) -> DeploymentTarget {
        DeploymentTarget::new(
            self.service_name.clone(),
            &self.binary_dir,
            &self.unit_dir,
            RemoteAddress::new(self.user.clone(), self.host.clone()),
        )
    }
}
