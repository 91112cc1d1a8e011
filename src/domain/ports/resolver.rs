//! Type resolver port.

use crate::domain::models::TypeHandle;

/// Resolves fully-qualified type names into loadable handles.
///
/// The production implementation is a registry populated at build time;
/// resolution failure is an expected outcome, not an error.
pub trait TypeResolver: Send + Sync {
    /// Resolves `qualified_name`, or `None` when nothing is registered
    /// under that name.
    fn resolve(&self, qualified_name: &str) -> Option<TypeHandle>;
}
