//! Test utilities and fixtures for cssheet
//!
//! Shared by the integration tests of the core crate.

pub mod fixtures;
pub mod project;
