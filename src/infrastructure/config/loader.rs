use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use figment::providers::{Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::errors::UnknownEnvironment;
use crate::domain::models::{Config, ConfigDocument, Environment};
use crate::infrastructure::registry::{
    DefaultObjectFactory, TypeRegistry, DEFAULT_EXCEPTION_MAPPER, DEFAULT_INPUT_CONVERTERS,
    DEFAULT_INPUT_VALIDATORS,
};

use super::options::{LoadOptions, DEFAULT_CONFIG_FILE};

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] figment::Error),

    #[error(transparent)]
    Environment(#[from] UnknownEnvironment),
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A configuration file on disk.
    File(PathBuf),
    /// The bundled default resource supplied by the application.
    Bundled,
    /// Hard-coded defaults.
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Bundled => f.write_str("bundled resource"),
            Self::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// A source that was tried and failed during a best-effort load.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub source: ConfigSource,
    pub reason: String,
}

/// Outcome of a best-effort load: the configuration, the source that
/// produced it, and the failures collected along the way.
#[derive(Debug)]
pub struct LoadReport {
    pub config: Config,
    pub source: ConfigSource,
    pub failures: Vec<SourceFailure>,
}

/// Configuration loader with ordered source fallback
///
/// Sources are tried in strict precedence, each only when the previous one
/// failed:
/// 1. The configured file location (defaulting to `deflector.yaml`)
/// 2. The bundled default resource, when the application supplied one
/// 3. Hard-coded defaults
///
/// The best-effort [`ConfigLoader::load`] never fails; the explicit-path
/// [`ConfigLoader::load_from`] propagates errors to callers that asserted a
/// specific source.
pub struct ConfigLoader {
    registry: Arc<TypeRegistry>,
    options: LoadOptions,
}

impl ConfigLoader {
    /// A loader resolving against `registry`, with no overrides set.
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            options: LoadOptions::default(),
        }
    }

    /// Replaces the loader's options wholesale.
    pub fn with_options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// Supplies the application's bundled default configuration.
    pub fn with_bundled(mut self, yaml: impl Into<Cow<'static, str>>) -> Self {
        self.options.bundled = Some(yaml.into());
        self
    }

    /// The registry this loader resolves type names against.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Best-effort load: always produces a configuration.
    ///
    /// Failures degrade to the next source; see [`ConfigLoader::load_report`]
    /// for the collected failure reasons.
    pub fn load(&self) -> Config {
        self.load_report().config
    }

    /// Best-effort load, returning the winning source and per-source
    /// failures alongside the configuration.
    pub fn load_report(&self) -> LoadReport {
        let mut failures = Vec::new();

        let location = self
            .options
            .config_location
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        match self.load_from(&location) {
            Ok(config) => {
                info!(path = %location.display(), "loaded configuration");
                return LoadReport {
                    config,
                    source: ConfigSource::File(location),
                    failures,
                };
            }
            Err(err) => {
                warn!(
                    path = %location.display(),
                    error = %err,
                    "could not load configuration file, trying next source"
                );
                failures.push(SourceFailure {
                    source: ConfigSource::File(location),
                    reason: err.to_string(),
                });
            }
        }

        if let Some(bundled) = &self.options.bundled {
            match self.parse_str(bundled) {
                Ok(doc) => {
                    info!("loaded configuration from the bundled resource");
                    return LoadReport {
                        config: self.finish(doc),
                        source: ConfigSource::Bundled,
                        failures,
                    };
                }
                Err(err) => {
                    warn!(error = %err, "could not parse the bundled configuration resource");
                    failures.push(SourceFailure {
                        source: ConfigSource::Bundled,
                        reason: err.to_string(),
                    });
                }
            }
        }

        warn!("falling back to the default configuration");
        LoadReport {
            config: self.default_configuration(),
            source: ConfigSource::Defaults,
            failures,
        }
    }

    /// Loads the configuration document at `path`.
    ///
    /// Unlike [`ConfigLoader::load`], read and parse failures propagate, as
    /// does an unrecognized environment override.
    pub fn load_from(&self, path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = self.parse_str(&raw)?;
        let mut config = self.finish(doc);

        if let Some(name) = &self.options.environment {
            let environment = Environment::from_str(name)?;
            info!(%environment, "overriding environment");
            config.environment = environment;
        }
        Ok(config)
    }

    /// The hard-coded default configuration.
    ///
    /// Placeholder controller/model packages, a placeholder specification
    /// URL, the default exception mapper, and the default converter and
    /// validator sets. Entity processors default to a distinct, empty set.
    pub fn default_configuration(&self) -> Config {
        let doc = ConfigDocument {
            controller_package: Some("sample::controllers".to_string()),
            model_package: Some("sample::models".to_string()),
            spec_url: Some("openapi.yaml".to_string()),
            exception_mappers: vec![DEFAULT_EXCEPTION_MAPPER.to_string()],
            input_converters: DEFAULT_INPUT_CONVERTERS
                .iter()
                .map(ToString::to_string)
                .collect(),
            input_validators: DEFAULT_INPUT_VALIDATORS
                .iter()
                .map(ToString::to_string)
                .collect(),
            ..ConfigDocument::default()
        };
        self.finish(doc)
    }

    fn parse_str(&self, raw: &str) -> Result<ConfigDocument, ConfigError> {
        let doc = Figment::new()
            .merge(Serialized::defaults(ConfigDocument::default()))
            .merge(Yaml::string(raw))
            .extract()?;
        Ok(doc)
    }

    /// Applies document-level fallbacks and resolves against the registry.
    ///
    /// A document declaring no exception mappers gets the default mapper;
    /// the mapper set stays empty only when the registry is missing even
    /// the built-in default, which callers must treat as a configuration
    /// defect rather than a parse error.
    fn finish(&self, mut doc: ConfigDocument) -> Config {
        if doc.exception_mappers.is_empty() {
            doc.exception_mappers.push(DEFAULT_EXCEPTION_MAPPER.to_string());
        }
        if let Some(url) = &self.options.spec_url {
            doc.spec_url = Some(url.clone());
        }
        let factory = Arc::new(DefaultObjectFactory::new(Arc::clone(&self.registry)));
        Config::from_document(doc, self.registry.as_ref(), factory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let loader = ConfigLoader::new(TypeRegistry::new());
        let config = loader.default_configuration();

        assert_eq!(config.controller_package.as_deref(), Some("sample::controllers"));
        assert_eq!(config.model_package.as_deref(), Some("sample::models"));
        assert_eq!(config.spec_url.as_deref(), Some("openapi.yaml"));
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.invalid_request_status_code, 400);
        assert_eq!(config.exception_mappers().len(), 1);
        assert!(config
            .exception_mappers()
            .iter()
            .any(|h| h.qualified_name() == DEFAULT_EXCEPTION_MAPPER));
        assert!(config.entity_processors.is_empty());
        assert!(!config.input_converters.is_empty());
        assert!(!config.input_validators.is_empty());
    }

    #[test]
    fn test_default_configuration_with_bare_registry() {
        // Missing built-ins degrade to an empty mapper set instead of
        // aborting startup.
        let loader = ConfigLoader::new(TypeRegistry::empty());
        let config = loader.default_configuration();
        assert!(config.exception_mappers().is_empty());
    }

    #[test]
    fn test_spec_url_option_overrides_document() {
        let loader = ConfigLoader::new(TypeRegistry::new()).with_options(LoadOptions {
            spec_url: Some("https://example.test/openapi.yaml".to_string()),
            ..LoadOptions::default()
        });
        let config = loader.default_configuration();
        assert_eq!(
            config.spec_url.as_deref(),
            Some("https://example.test/openapi.yaml")
        );
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let loader = ConfigLoader::new(TypeRegistry::new());
        let err = loader.load_from("/nonexistent/deflector.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
