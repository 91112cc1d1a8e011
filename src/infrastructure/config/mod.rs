//! Configuration management infrastructure
//!
//! Layered configuration using figment:
//! - YAML file loading with ordered source fallback
//! - Explicit ambient overrides via [`LoadOptions`]
//! - Structured failure reporting for the best-effort path

pub mod loader;
pub mod options;

pub use loader::{ConfigError, ConfigLoader, ConfigSource, LoadReport, SourceFailure};
pub use options::{LoadOptions, CONFIG_LOCATION_ENV, DEFAULT_CONFIG_FILE, ENVIRONMENT_ENV};
