//! CLI type definitions
//!
//! This module contains the clap command structures that define the CLI
//! interface; command implementations live in [`commands`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "deflector")]
#[command(about = "Deflector - configuration and bootstrap layer for OpenAPI-driven services", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file and report unresolved types
    Check {
        /// Configuration file to validate
        path: PathBuf,

        /// Environment override applied after loading
        #[arg(short, long, env = "DEFLECTOR_ENVIRONMENT")]
        environment: Option<String>,
    },

    /// Load configuration through the standard source chain and print the result
    Show {
        /// Configuration file location
        #[arg(short, long, env = "DEFLECTOR_CONFIG")]
        config: Option<PathBuf>,

        /// Environment override applied after loading
        #[arg(short, long, env = "DEFLECTOR_ENVIRONMENT")]
        environment: Option<String>,
    },
}
