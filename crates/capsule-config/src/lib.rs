//! # Capsule Config
//!
//! Configuration management for the Capsule hand-off orchestrator.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
