//! Integration test utilities for the Spektr server
//!
//! This crate provides helpers for running end-to-end tests against
//! the action endpoint.

pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
