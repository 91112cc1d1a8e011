//! Domain layer for the configuration/bootstrap system
//!
//! This module contains the configuration data model and the ports the
//! surrounding framework plugs into.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{FactoryError, UnknownEnvironment};
