//! Service configuration model.
//!
//! Two records split the serde boundary from the resolved state:
//!
//! - [`ConfigDocument`]: field-for-field what a YAML document may declare.
//! - [`Config`]: the resolved, read-mostly configuration produced by the
//!   load path, with type names replaced by registry handles.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::models::{Environment, TypeHandle};
use crate::domain::ports::{ObjectFactory, TypeResolver};

/// Environment variable overriding the effective specification-document URL.
///
/// Checked on every read of [`Config::effective_spec_url`], never cached.
pub const SPEC_URL_ENV: &str = "DEFLECTOR_SPEC_URL";

/// A configuration document as declared on disk.
///
/// Every field is defaulted; unknown fields in the document are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    /// Package the surrounding framework scans for controllers.
    pub controller_package: Option<String>,
    /// Single controller class, when not scanning a package.
    pub controller_class: Option<String>,
    /// Package model names are resolved against.
    pub model_package: Option<String>,
    /// Qualified name of a service-wide filter.
    pub filter_class: Option<String>,

    /// Where the API specification document lives.
    pub spec_url: Option<String>,
    /// Path the specification document is served under.
    pub spec_base: String,
    /// Path prefix the service is mounted under.
    pub root_path: String,

    /// Status code returned for requests failing validation.
    pub invalid_request_status_code: u16,
    /// Deployment environment.
    pub environment: Environment,

    /// Logical model name to fully-qualified type name.
    pub model_mappings: HashMap<String, String>,
    /// Qualified names of exception-to-response translators.
    pub exception_mappers: Vec<String>,

    /// Qualified names of input converters, in invocation order.
    pub input_converters: Vec<String>,
    /// Qualified names of input validators, in invocation order.
    pub input_validators: Vec<String>,
    /// Qualified names of entity processors, in invocation order.
    pub entity_processors: Vec<String>,
    /// Qualified names of filters wrapped around handler invocation.
    pub handler_invocation_filters: Vec<String>,
}

impl Default for ConfigDocument {
    fn default() -> Self {
        Self {
            controller_package: None,
            controller_class: None,
            model_package: None,
            filter_class: None,
            spec_url: None,
            spec_base: "/".to_string(),
            root_path: String::new(),
            invalid_request_status_code: 400,
            environment: Environment::Development,
            model_mappings: HashMap::new(),
            exception_mappers: Vec::new(),
            input_converters: Vec::new(),
            input_validators: Vec::new(),
            entity_processors: Vec::new(),
            handler_invocation_filters: Vec::new(),
        }
    }
}

/// Resolved service configuration.
///
/// Constructed once at startup by the loader, optionally mutated during
/// initialization, then held as read-mostly state for the life of the
/// service. Publish it fully initialized; readers afterward must treat it
/// as effectively immutable.
#[derive(Clone)]
pub struct Config {
    pub controller_package: Option<String>,
    pub controller_class: Option<String>,
    pub model_package: Option<String>,
    pub filter_class: Option<String>,

    /// Stored specification-document URL. Prefer
    /// [`Config::effective_spec_url`], which honors the runtime override.
    pub spec_url: Option<String>,
    pub spec_base: String,
    pub root_path: String,

    pub invalid_request_status_code: u16,
    pub environment: Environment,

    pub input_converters: Vec<String>,
    pub input_validators: Vec<String>,
    pub entity_processors: Vec<String>,
    pub handler_invocation_filters: Vec<String>,

    /// Legacy factory slot, retained for backward compatibility. Unused.
    pub controller_factory: Option<Arc<dyn ObjectFactory>>,
    /// Factory the framework uses to instantiate filters.
    pub object_factory: Arc<dyn ObjectFactory>,

    model_map: HashMap<String, TypeHandle>,
    unimplemented_models: HashSet<String>,
    exception_mappers: HashSet<TypeHandle>,
}

impl Config {
    /// Resolves a parsed document into a `Config`.
    ///
    /// Declared model mappings and exception mappers are resolved against
    /// `resolver`; entries that fail to resolve are recorded rather than
    /// aborting.
    pub fn from_document(
        doc: ConfigDocument,
        resolver: &dyn TypeResolver,
        object_factory: Arc<dyn ObjectFactory>,
    ) -> Self {
        let mut config = Self {
            controller_package: doc.controller_package,
            controller_class: doc.controller_class,
            model_package: doc.model_package,
            filter_class: doc.filter_class,
            spec_url: doc.spec_url,
            spec_base: doc.spec_base,
            root_path: doc.root_path,
            invalid_request_status_code: doc.invalid_request_status_code,
            environment: doc.environment,
            input_converters: doc.input_converters,
            input_validators: doc.input_validators,
            entity_processors: doc.entity_processors,
            handler_invocation_filters: doc.handler_invocation_filters,
            controller_factory: None,
            object_factory,
            model_map: HashMap::new(),
            unimplemented_models: HashSet::new(),
            exception_mappers: HashSet::new(),
        };
        config.set_model_mappings(resolver, &doc.model_mappings);
        for name in &doc.exception_mappers {
            config.add_exception_mapper(resolver, name);
        }
        config
    }

    /// Effective specification-document URL.
    ///
    /// The `DEFLECTOR_SPEC_URL` environment variable, when present, always
    /// wins over the stored field. Re-checked on every read.
    pub fn effective_spec_url(&self) -> Option<String> {
        std::env::var(SPEC_URL_ENV).ok().or_else(|| self.spec_url.clone())
    }

    /// Resolves a batch of logical-name to qualified-name mappings.
    ///
    /// Each entry lands in exactly one of `model_map` (resolved) or
    /// `unimplemented_models` (unresolved qualified name); a single bad
    /// mapping never aborts the batch. Re-resolving a key overwrites any
    /// prior result for that key.
    pub fn set_model_mappings(
        &mut self,
        resolver: &dyn TypeResolver,
        mappings: &HashMap<String, String>,
    ) {
        for (name, qualified) in mappings {
            match resolver.resolve(qualified) {
                Some(handle) => {
                    self.unimplemented_models.remove(qualified);
                    self.model_map.insert(name.clone(), handle);
                }
                None => {
                    error!(
                        model = %name,
                        type_name = %qualified,
                        "unable to resolve model mapping, recording as unimplemented"
                    );
                    self.model_map.remove(name);
                    self.unimplemented_models.insert(qualified.clone());
                }
            }
        }
    }

    /// Resolves a single exception mapper by qualified name.
    ///
    /// Resolution failure is logged and skipped, leaving the mapper set
    /// unchanged.
    pub fn add_exception_mapper(&mut self, resolver: &dyn TypeResolver, qualified_name: &str) {
        match resolver.resolve(qualified_name) {
            Some(handle) => {
                self.exception_mappers.insert(handle);
            }
            None => {
                error!(
                    type_name = %qualified_name,
                    "unable to resolve exception mapper, skipping"
                );
            }
        }
    }

    /// Inserts an already-resolved model handle under `name`.
    pub fn add_model_mapping(&mut self, name: impl Into<String>, handle: TypeHandle) {
        self.model_map.insert(name.into(), handle);
    }

    /// Looks up the resolved handle for a logical model name.
    pub fn model_mapping(&self, name: &str) -> Option<&TypeHandle> {
        self.model_map.get(name)
    }

    /// Resolved model map: logical name to handle.
    pub fn model_map(&self) -> &HashMap<String, TypeHandle> {
        &self.model_map
    }

    /// Logical-name to qualified-name view of the resolved model map.
    pub fn model_mappings(&self) -> HashMap<String, String> {
        self.model_map
            .iter()
            .map(|(name, handle)| (name.clone(), handle.qualified_name().to_string()))
            .collect()
    }

    /// Qualified names that failed to resolve at load time.
    pub fn unimplemented_models(&self) -> &HashSet<String> {
        &self.unimplemented_models
    }

    /// Resolved exception mapper handles.
    pub fn exception_mappers(&self) -> &HashSet<TypeHandle> {
        &self.exception_mappers
    }

    /// Replaces the exception mapper set wholesale.
    pub fn set_exception_mappers(&mut self, mappers: HashSet<TypeHandle>) {
        self.exception_mappers = mappers;
    }
}

// Collaborator factories carry no comparable state; equality covers the
// declarative fields and resolution results only.
impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.controller_package == other.controller_package
            && self.controller_class == other.controller_class
            && self.model_package == other.model_package
            && self.filter_class == other.filter_class
            && self.spec_url == other.spec_url
            && self.spec_base == other.spec_base
            && self.root_path == other.root_path
            && self.invalid_request_status_code == other.invalid_request_status_code
            && self.environment == other.environment
            && self.input_converters == other.input_converters
            && self.input_validators == other.input_validators
            && self.entity_processors == other.entity_processors
            && self.handler_invocation_filters == other.handler_invocation_filters
            && self.model_map == other.model_map
            && self.unimplemented_models == other.unimplemented_models
            && self.exception_mappers == other.exception_mappers
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("controller_package", &self.controller_package)
            .field("controller_class", &self.controller_class)
            .field("model_package", &self.model_package)
            .field("filter_class", &self.filter_class)
            .field("spec_url", &self.spec_url)
            .field("spec_base", &self.spec_base)
            .field("root_path", &self.root_path)
            .field(
                "invalid_request_status_code",
                &self.invalid_request_status_code,
            )
            .field("environment", &self.environment)
            .field("input_converters", &self.input_converters)
            .field("input_validators", &self.input_validators)
            .field("entity_processors", &self.entity_processors)
            .field(
                "handler_invocation_filters",
                &self.handler_invocation_filters,
            )
            .field("model_map", &self.model_map)
            .field("unimplemented_models", &self.unimplemented_models)
            .field("exception_mappers", &self.exception_mappers)
            .finish_non_exhaustive()
    }
}
