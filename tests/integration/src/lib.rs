//! Integration test utilities for the campaign API
//!
//! Spawns the real server against the configured database and drives it over
//! HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
