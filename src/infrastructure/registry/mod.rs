//! Type registry and the default object factory.
//!
//! Replaces reflective class loading with an explicit mapping from
//! fully-qualified type name to handle, populated at build time. Resolving
//! by name stays cheap and failure-tolerant without any runtime discovery.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::errors::FactoryError;
use crate::domain::models::{FilterConstructor, TypeHandle};
use crate::domain::ports::{HandlerFilter, ObjectFactory, TypeResolver};

/// Qualified name of the exception mapper the framework always provides.
pub const DEFAULT_EXCEPTION_MAPPER: &str = "deflector::mappers::DefaultExceptionMapper";

/// Input converters installed by the default configuration.
pub const DEFAULT_INPUT_CONVERTERS: &[&str] = &["deflector::converters::DefaultConverter"];

/// Input validators installed by the default configuration.
pub const DEFAULT_INPUT_VALIDATORS: &[&str] = &["deflector::validators::DefaultValidator"];

/// Registry of loadable types, keyed by fully-qualified name.
pub struct TypeRegistry {
    entries: HashMap<String, TypeHandle>,
}

impl TypeRegistry {
    /// A registry pre-populated with the built-in framework types.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_type(DEFAULT_EXCEPTION_MAPPER);
        for name in DEFAULT_INPUT_CONVERTERS {
            registry.register_type(name);
        }
        for name in DEFAULT_INPUT_VALIDATORS {
            registry.register_type(name);
        }
        registry
    }

    /// A registry with nothing registered, not even the built-ins.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers a plain type (model, exception mapper) under `name`.
    pub fn register_type(&mut self, name: &str) {
        self.entries
            .insert(name.to_string(), TypeHandle::new(name));
    }

    /// Registers a filter type with its constructor under `name`.
    pub fn register_filter(&mut self, name: &str, ctor: FilterConstructor) {
        self.entries
            .insert(name.to_string(), TypeHandle::filter(name, ctor));
    }

    /// Builder-style [`TypeRegistry::register_type`].
    pub fn with_type(mut self, name: &str) -> Self {
        self.register_type(name);
        self
    }

    /// Builder-style [`TypeRegistry::register_filter`].
    pub fn with_filter(mut self, name: &str, ctor: FilterConstructor) -> Self {
        self.register_filter(name, ctor);
        self
    }

    /// Names of every registered type, unordered.
    pub fn available_types(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeResolver for TypeRegistry {
    fn resolve(&self, qualified_name: &str) -> Option<TypeHandle> {
        self.entries.get(qualified_name).cloned()
    }
}

/// Object factory resolving filters through a shared [`TypeRegistry`].
pub struct DefaultObjectFactory {
    registry: Arc<TypeRegistry>,
}

impl DefaultObjectFactory {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }
}

impl ObjectFactory for DefaultObjectFactory {
    fn instantiate_filter(
        &self,
        qualified_name: &str,
    ) -> Result<Box<dyn HandlerFilter>, FactoryError> {
        let handle = self
            .registry
            .resolve(qualified_name)
            .ok_or_else(|| FactoryError::UnknownType(qualified_name.to_string()))?;
        handle
            .instantiate_filter()
            .ok_or_else(|| FactoryError::NotInstantiable(qualified_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TimingFilter;

    impl HandlerFilter for TimingFilter {
        fn name(&self) -> &'static str {
            "timing"
        }
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = TypeRegistry::new();
        assert!(registry.resolve(DEFAULT_EXCEPTION_MAPPER).is_some());
        for name in DEFAULT_INPUT_CONVERTERS {
            assert!(registry.resolve(name).is_some());
        }
        for name in DEFAULT_INPUT_VALIDATORS {
            assert!(registry.resolve(name).is_some());
        }
    }

    #[test]
    fn test_empty_registry_resolves_nothing() {
        let registry = TypeRegistry::empty();
        assert!(registry.resolve(DEFAULT_EXCEPTION_MAPPER).is_none());
        assert!(registry.available_types().is_empty());
    }

    #[test]
    fn test_resolve_registered_type() {
        let registry = TypeRegistry::empty().with_type("sample::models::Pet");
        let handle = registry.resolve("sample::models::Pet").unwrap();
        assert_eq!(handle.qualified_name(), "sample::models::Pet");
        assert!(registry.resolve("sample::models::Order").is_none());
    }

    #[test]
    fn test_factory_instantiates_registered_filter() {
        let registry = Arc::new(TypeRegistry::empty().with_filter(
            "sample::filters::Timing",
            Arc::new(|| Box::new(TimingFilter) as Box<dyn HandlerFilter>),
        ));
        let factory = DefaultObjectFactory::new(registry);

        let filter = factory.instantiate_filter("sample::filters::Timing").unwrap();
        assert_eq!(filter.name(), "timing");
    }

    #[test]
    fn test_factory_unknown_type_error() {
        let factory = DefaultObjectFactory::new(Arc::new(TypeRegistry::empty()));
        let err = factory.instantiate_filter("sample::filters::Missing");
        assert!(matches!(err, Err(FactoryError::UnknownType(name)) if name == "sample::filters::Missing"));
    }

    #[test]
    fn test_factory_not_instantiable_error() {
        let registry = Arc::new(TypeRegistry::empty().with_type("sample::models::Pet"));
        let factory = DefaultObjectFactory::new(registry);
        let err = factory.instantiate_filter("sample::models::Pet");
        assert!(matches!(err, Err(FactoryError::NotInstantiable(_))));
    }
}
