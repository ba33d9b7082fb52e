//! Infrastructure layer.
//!
//! Configuration loading and the composition root that wires adapters into
//! the application services.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Environment configuration and logging setup

pub mod bootstrap;
pub mod config;
