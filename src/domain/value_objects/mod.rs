//! Domain Value Objects
//!
//! Immutable value types that represent deploy concepts. Constructors
//! validate; holding one of these means the input passed its allow-list.

mod deploy_step;
mod deploy_user;
mod deployment_target;
mod environment;
mod host;
mod service_name;
mod validation;

pub use deploy_step::{DeployState, DeployStep};
pub use deploy_user::DeployUser;
pub use deployment_target::{DeploymentTarget, RemoteAddress, SYSTEMD_UNIT_DIR};
pub use environment::Environment;
pub use host::Host;
pub use service_name::ServiceName;
pub use validation::{ConfigField, ValidationError, ValidationReason};
