//! Integration tests for filter instantiation through the object factory,
//! including substituting a custom factory implementation.

use std::sync::Arc;

use deflector::{
    ConfigLoader, DefaultObjectFactory, FactoryError, HandlerFilter, ObjectFactory, TypeRegistry,
};

struct RequestIdFilter;

impl HandlerFilter for RequestIdFilter {
    fn name(&self) -> &'static str {
        "request_id"
    }
}

#[test]
fn test_default_factory_instantiates_registered_filters() {
    let registry = Arc::new(TypeRegistry::new().with_filter(
        "petstore::filters::RequestIdFilter",
        Arc::new(|| Box::new(RequestIdFilter) as Box<dyn HandlerFilter>),
    ));
    let factory = DefaultObjectFactory::new(registry);

    let filter = factory
        .instantiate_filter("petstore::filters::RequestIdFilter")
        .unwrap();
    assert_eq!(filter.name(), "request_id");
}

#[test]
fn test_default_factory_reports_typed_errors() {
    let registry = Arc::new(TypeRegistry::new().with_type("petstore::models::Pet"));
    let factory = DefaultObjectFactory::new(registry);

    let err = factory.instantiate_filter("petstore::filters::Nope");
    assert!(matches!(err, Err(FactoryError::UnknownType(_))));

    let err = factory.instantiate_filter("petstore::models::Pet");
    assert!(matches!(err, Err(FactoryError::NotInstantiable(_))));
}

/// A dependency-injection style factory ignoring the registry entirely.
struct InjectedFactory;

impl ObjectFactory for InjectedFactory {
    fn instantiate_filter(
        &self,
        qualified_name: &str,
    ) -> Result<Box<dyn HandlerFilter>, FactoryError> {
        if qualified_name == "petstore::filters::RequestIdFilter" {
            Ok(Box::new(RequestIdFilter))
        } else {
            Err(FactoryError::Instantiation {
                name: qualified_name.to_string(),
                reason: "no binding in container".to_string(),
            })
        }
    }
}

#[test]
fn test_object_factory_can_be_substituted_on_a_config() {
    let loader = ConfigLoader::new(TypeRegistry::new());
    let mut config = loader.default_configuration();
    config.object_factory = Arc::new(InjectedFactory);

    let filter = config
        .object_factory
        .instantiate_filter("petstore::filters::RequestIdFilter")
        .unwrap();
    assert_eq!(filter.name(), "request_id");

    let err = config
        .object_factory
        .instantiate_filter("petstore::filters::Other");
    assert!(matches!(err, Err(FactoryError::Instantiation { .. })));
}
