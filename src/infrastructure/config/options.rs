//! Explicit load options.
//!
//! Ambient settings the original design read from global properties are
//! passed into the loader as an options struct instead, keeping precedence
//! visible at the call site.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::domain::models::SPEC_URL_ENV;

/// Environment variable naming the configuration file location.
pub const CONFIG_LOCATION_ENV: &str = "DEFLECTOR_CONFIG";

/// Environment variable overriding the deployment environment.
pub const ENVIRONMENT_ENV: &str = "DEFLECTOR_ENVIRONMENT";

/// Conventional configuration file name, used when no location is given.
pub const DEFAULT_CONFIG_FILE: &str = "deflector.yaml";

/// Optional overrides consumed by the loader.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Configuration file location; defaults to [`DEFAULT_CONFIG_FILE`].
    pub config_location: Option<PathBuf>,

    /// Environment name overriding whatever the document declares.
    /// Parsed strictly: an unrecognized value fails the explicit-path load.
    pub environment: Option<String>,

    /// Specification-document URL overriding the document's `spec_url`.
    pub spec_url: Option<String>,

    /// Bundled default configuration supplied by the embedding application,
    /// consulted when the configured file cannot be loaded.
    pub bundled: Option<Cow<'static, str>>,
}

impl LoadOptions {
    /// Captures the conventional `DEFLECTOR_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            config_location: std::env::var_os(CONFIG_LOCATION_ENV).map(PathBuf::from),
            environment: std::env::var(ENVIRONMENT_ENV).ok(),
            spec_url: std::env::var(SPEC_URL_ENV).ok(),
            bundled: None,
        }
    }
}
