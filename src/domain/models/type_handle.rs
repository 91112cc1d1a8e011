//! Resolved type handles.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::domain::ports::HandlerFilter;

/// Constructor closure for a filter type.
pub type FilterConstructor = Arc<dyn Fn() -> Box<dyn HandlerFilter> + Send + Sync>;

/// A resolved, loadable type.
///
/// Handles are produced by a type registry and stand in for what a
/// reflective runtime would call a loaded class: an opaque token proving the
/// qualified name is backed by real code. Filter types additionally carry a
/// constructor so an object factory can instantiate them.
#[derive(Clone)]
pub struct TypeHandle {
    name: Arc<str>,
    filter_ctor: Option<FilterConstructor>,
}

impl TypeHandle {
    /// A plain handle with no constructor (models, exception mappers).
    pub fn new(qualified_name: impl Into<Arc<str>>) -> Self {
        Self {
            name: qualified_name.into(),
            filter_ctor: None,
        }
    }

    /// A handle for a filter type, carrying its constructor.
    pub fn filter(qualified_name: impl Into<Arc<str>>, ctor: FilterConstructor) -> Self {
        Self {
            name: qualified_name.into(),
            filter_ctor: Some(ctor),
        }
    }

    /// Fully-qualified name this handle was resolved from.
    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    /// Whether this handle can instantiate a filter.
    pub fn is_filter(&self) -> bool {
        self.filter_ctor.is_some()
    }

    /// Instantiates the filter, if this handle carries a constructor.
    pub fn instantiate_filter(&self) -> Option<Box<dyn HandlerFilter>> {
        self.filter_ctor.as_ref().map(|ctor| ctor())
    }
}

// Identity follows the qualified name; the constructor is not comparable.
impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeHandle")
            .field("name", &self.name)
            .field("is_filter", &self.is_filter())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopFilter;

    impl HandlerFilter for NoopFilter {
        fn name(&self) -> &'static str {
            "noop"
        }
    }

    #[test]
    fn test_plain_handle_is_not_a_filter() {
        let handle = TypeHandle::new("sample::models::Pet");
        assert_eq!(handle.qualified_name(), "sample::models::Pet");
        assert!(!handle.is_filter());
        assert!(handle.instantiate_filter().is_none());
    }

    #[test]
    fn test_filter_handle_instantiates() {
        let handle = TypeHandle::filter(
            "sample::filters::Noop",
            Arc::new(|| Box::new(NoopFilter) as Box<dyn HandlerFilter>),
        );
        assert!(handle.is_filter());
        let filter = handle.instantiate_filter().unwrap();
        assert_eq!(filter.name(), "noop");
    }

    #[test]
    fn test_identity_by_name() {
        let plain = TypeHandle::new("sample::filters::Noop");
        let with_ctor = TypeHandle::filter(
            "sample::filters::Noop",
            Arc::new(|| Box::new(NoopFilter) as Box<dyn HandlerFilter>),
        );
        assert_eq!(plain, with_ctor);
    }
}
