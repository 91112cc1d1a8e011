//! Ports - interfaces the surrounding framework plugs into.

pub mod object_factory;
pub mod resolver;

pub use object_factory::{HandlerFilter, ObjectFactory};
pub use resolver::TypeResolver;
