//! Deflector - configuration and bootstrap layer for OpenAPI-driven services
//!
//! Deflector maps a machine-readable API specification onto controller
//! implementations. This crate is the configuration half of that story:
//! layered YAML loading with ordered source fallback, environment
//! selection, and an explicit type registry standing in for reflective
//! class loading.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration data model and the
//!   ports the surrounding framework plugs into
//! - **Infrastructure Layer** (`infrastructure`): figment-based loading and
//!   the build-time type registry
//! - **CLI Layer** (`cli`): `check`/`show` commands for operators
//!
//! # Example
//!
//! ```
//! use deflector::{ConfigLoader, TypeRegistry};
//!
//! // Best-effort startup load: missing or broken sources degrade to the
//! // next tier, ending at the built-in defaults.
//! let loader = ConfigLoader::new(TypeRegistry::new());
//! let config = loader.load();
//! assert!(!config.exception_mappers().is_empty());
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::errors::{FactoryError, UnknownEnvironment};
pub use domain::models::{
    Config, ConfigDocument, Environment, FilterConstructor, TypeHandle, SPEC_URL_ENV,
};
pub use domain::ports::{HandlerFilter, ObjectFactory, TypeResolver};
pub use infrastructure::config::{
    ConfigError, ConfigLoader, ConfigSource, LoadOptions, LoadReport, SourceFailure,
    CONFIG_LOCATION_ENV, DEFAULT_CONFIG_FILE, ENVIRONMENT_ENV,
};
pub use infrastructure::registry::{
    DefaultObjectFactory, TypeRegistry, DEFAULT_EXCEPTION_MAPPER, DEFAULT_INPUT_CONVERTERS,
    DEFAULT_INPUT_VALIDATORS,
};
