//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployUseCase;
use crate::domain::ports::{RemoteTransport, TransportError};
use crate::infrastructure::{
    detect_strategy, DryRunTransport, RsyncTransfer, SshTransport, TransportOptions,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<Box<dyn RemoteTransport>>;

/// Create the transport for a run
///
/// A dry run never needs the tools to be installed; it plans with rsync when
/// no transfer tool is found.
pub fn create_transport(
    dry_run: bool,
    options: TransportOptions,
) -> Result<Box<dyn RemoteTransport>, TransportError> {
    if dry_run {
        let strategy = detect_strategy().unwrap_or_else(|| Box::new(RsyncTransfer));
        return Ok(Box::new(DryRunTransport::new(strategy, options)));
    }
    Ok(Box::new(SshTransport::detect(options)?))
}

/// Create a deploy use case with all dependencies wired up
pub fn create_deploy_use_case(
    dry_run: bool,
    options: TransportOptions,
) -> Result<ConcreteDeployUseCase, TransportError> {
    Ok(DeployUseCase::new(create_transport(dry_run, options)?))
}
