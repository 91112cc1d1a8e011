//! CLI command implementations.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

use crate::domain::models::Config;
use crate::infrastructure::config::{ConfigLoader, LoadOptions};
use crate::infrastructure::registry::TypeRegistry;

/// Flattened, serializable view of a resolved configuration.
#[derive(Serialize)]
struct ConfigSummary {
    environment: String,
    environment_id: u8,
    spec_url: Option<String>,
    spec_base: String,
    root_path: String,
    invalid_request_status_code: u16,
    controller_package: Option<String>,
    controller_class: Option<String>,
    model_package: Option<String>,
    filter_class: Option<String>,
    model_mappings: BTreeMap<String, String>,
    unimplemented_models: Vec<String>,
    exception_mappers: Vec<String>,
    input_converters: Vec<String>,
    input_validators: Vec<String>,
    entity_processors: Vec<String>,
    handler_invocation_filters: Vec<String>,
}

impl ConfigSummary {
    fn new(config: &Config) -> Self {
        let mut unimplemented_models: Vec<String> =
            config.unimplemented_models().iter().cloned().collect();
        unimplemented_models.sort();

        let mut exception_mappers: Vec<String> = config
            .exception_mappers()
            .iter()
            .map(|handle| handle.qualified_name().to_string())
            .collect();
        exception_mappers.sort();

        Self {
            environment: config.environment.to_string(),
            environment_id: config.environment.id(),
            spec_url: config.effective_spec_url(),
            spec_base: config.spec_base.clone(),
            root_path: config.root_path.clone(),
            invalid_request_status_code: config.invalid_request_status_code,
            controller_package: config.controller_package.clone(),
            controller_class: config.controller_class.clone(),
            model_package: config.model_package.clone(),
            filter_class: config.filter_class.clone(),
            model_mappings: config.model_mappings().into_iter().collect(),
            unimplemented_models,
            exception_mappers,
            input_converters: config.input_converters.clone(),
            input_validators: config.input_validators.clone(),
            entity_processors: config.entity_processors.clone(),
            handler_invocation_filters: config.handler_invocation_filters.clone(),
        }
    }
}

fn print<T: Serialize>(value: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", serde_yaml::to_string(value)?);
    }
    Ok(())
}

/// Validates the configuration file at `path`, failing on read, parse, or
/// environment-override errors. Unresolved model mappings degrade those
/// models only and are reported, not fatal.
pub fn check(path: PathBuf, environment: Option<String>, json: bool) -> Result<()> {
    let loader = ConfigLoader::new(TypeRegistry::new()).with_options(LoadOptions {
        config_location: Some(path.clone()),
        environment,
        ..LoadOptions::default()
    });

    let config = loader
        .load_from(&path)
        .with_context(|| format!("configuration at {} is not loadable", path.display()))?;

    for qualified in config.unimplemented_models() {
        warn!(type_name = %qualified, "declared model type is not registered");
    }
    if config.exception_mappers().is_empty() {
        warn!("exception mapper set is empty; check the registered framework types");
    }

    print(&ConfigSummary::new(&config), json)
}

#[derive(Serialize)]
struct ShowOutput {
    source: String,
    failures: Vec<ShowFailure>,
    config: ConfigSummary,
}

#[derive(Serialize)]
struct ShowFailure {
    source: String,
    reason: String,
}

/// Loads configuration through the standard source chain and prints the
/// effective result along with the source that produced it.
pub fn show(config: Option<PathBuf>, environment: Option<String>, json: bool) -> Result<()> {
    let mut options = LoadOptions::from_env();
    if config.is_some() {
        options.config_location = config;
    }
    if environment.is_some() {
        options.environment = environment;
    }

    let report = ConfigLoader::new(TypeRegistry::new())
        .with_options(options)
        .load_report();

    let output = ShowOutput {
        source: report.source.to_string(),
        failures: report
            .failures
            .iter()
            .map(|failure| ShowFailure {
                source: failure.source.to_string(),
                reason: failure.reason.clone(),
            })
            .collect(),
        config: ConfigSummary::new(&report.config),
    };
    print(&output, json)
}
