//! Domain-level error types.

use thiserror::Error;

/// Unrecognized environment name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown environment `{value}`. Must be one of: development, staging, production")]
pub struct UnknownEnvironment {
    /// The value that failed to parse.
    pub value: String,
}

/// Errors raised by an object factory when instantiating a filter.
#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Unknown type `{0}`: not present in the registry")]
    UnknownType(String),

    #[error("Type `{0}` is registered but carries no filter constructor")]
    NotInstantiable(String),

    #[error("Failed to instantiate `{name}`: {reason}")]
    Instantiation { name: String, reason: String },
}
