//! Infrastructure layer module
//!
//! This module contains the concrete implementations behind the domain
//! ports:
//! - Configuration loading (figment-based, ordered source fallback)
//! - The build-time type registry and the default object factory

pub mod config;
pub mod registry;
