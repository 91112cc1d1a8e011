//! Object factory port - interface for instantiating filters.

use crate::domain::errors::FactoryError;

/// Pluggable behavior invoked around request handling.
///
/// The surrounding framework drives invocation; this crate only names,
/// resolves, and instantiates filter types.
pub trait HandlerFilter: Send + Sync {
    /// Short name of the filter, for diagnostics.
    fn name(&self) -> &'static str;
}

/// Behavior for instantiating filters.
///
/// Provide a custom implementation to the configuration for hooking into
/// dependency-injection containers, script engines, etc. The default
/// implementation resolves through the shared type registry.
pub trait ObjectFactory: Send + Sync {
    /// Instantiates the filter named by `qualified_name`.
    ///
    /// Fails with a typed error when the name cannot be found, loaded, or
    /// instantiated.
    fn instantiate_filter(&self, qualified_name: &str)
        -> Result<Box<dyn HandlerFilter>, FactoryError>;
}
