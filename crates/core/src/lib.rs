//! `partscope-core` — shared building blocks for the catalog search workspace.
//!
//! This crate contains **pure** primitives (no I/O): configuration value
//! objects, snapshot identifiers and the configuration error model.

pub mod config;
pub mod error;
pub mod id;
pub mod value_object;

pub use config::{SearchConfig, SearchKey, Threshold};
pub use error::{ConfigError, ConfigResult};
pub use id::SnapshotId;
pub use value_object::ValueObject;
