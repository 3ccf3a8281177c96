//! Domain Layer
//!
//! The core of Blitz - deploy concepts without process or network I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Validated input types (ServiceName, Host, ...) and
//!   the derived `DeploymentTarget`
//! - `services/` - Pure domain services (remote activation command builder)
//! - `ports/` - Interface definitions for infrastructure (transport, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or opens connections
//! 2. **Valid by construction** - Value objects can only hold allow-listed input
//! 3. **Ports & Adapters** - All remote access goes through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
