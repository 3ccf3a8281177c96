//! Deployment target - where the artifacts come from and where they go.
//!
//! Derived from a validated configuration; never persisted.

use std::fmt;
use std::path::{Path, PathBuf};

use super::deploy_user::DeployUser;
use super::host::Host;
use super::service_name::ServiceName;

/// systemd directory the unit file is installed into on the remote host
pub const SYSTEMD_UNIT_DIR: &str = "/etc/systemd/system/";

/// Remote login address (`user@host`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteAddress {
    user: DeployUser,
    host: Host,
}

impl RemoteAddress {
    pub fn new(user: DeployUser, host: Host) -> Self {
        Self { user, host }
    }

    pub fn user(&self) -> &DeployUser {
        &self.user
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Destination argument for rsync/scp pointing at the remote home directory.
    ///
    /// IPv6 literals are bracketed so the trailing `:` is not read as part
    /// of the address.
    pub fn home_destination(&self) -> String {
        if self.host.is_ipv6() {
            format!("{}@[{}]:", self.user, self.host)
        } else {
            format!("{}@{}:", self.user, self.host)
        }
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}

/// Local artifact paths plus the remote address for one deploy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentTarget {
    service: ServiceName,
    binary_path: PathBuf,
    unit_path: PathBuf,
    remote: RemoteAddress,
}

impl DeploymentTarget {
    pub fn new(
        service: ServiceName,
        binary_dir: &Path,
        unit_dir: &Path,
        remote: RemoteAddress,
    ) -> Self {
        let binary_path = binary_dir.join(service.as_str());
        let unit_path = unit_dir.join(service.unit_file_name());
        Self {
            service,
            binary_path,
            unit_path,
            remote,
        }
    }

    pub fn service(&self) -> &ServiceName {
        &self.service
    }

    /// `<binary_dir>/<service>`
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// `<unit_dir>/<service>.service`
    pub fn unit_path(&self) -> &Path {
        &self.unit_path
    }

    pub fn remote(&self) -> &RemoteAddress {
        &self.remote
    }

    /// Final location of the unit file on the remote host
    pub fn remote_unit_path(&self) -> String {
        format!("{}{}", SYSTEMD_UNIT_DIR, self.service.unit_file_name())
    }
}
