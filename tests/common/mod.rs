//! Common test utilities for Blitz CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory with a service binary and unit file
//! - Assertion macros: `assert_output_contains!`, `assert_exit_code!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;

pub use env::*;
