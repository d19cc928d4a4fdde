//! Shared types for `nmapr`: the domain model, the error taxonomy and runtime
//! configuration. Nothing in this crate performs IO besides `PATH` lookup.

pub mod config;
pub mod error;
pub mod network;

pub use error::{ConfigError, Error, Result, ValidationError};
