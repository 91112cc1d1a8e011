pub mod config;
pub mod environment;
pub mod type_handle;

pub use config::{Config, ConfigDocument, SPEC_URL_ENV};
pub use environment::Environment;
pub use type_handle::{FilterConstructor, TypeHandle};
