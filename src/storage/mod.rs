//! Storage layer for city-browser
//!
//! Handles configuration management. Configuration lives in a TOML file under
//! the platform config directory.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
