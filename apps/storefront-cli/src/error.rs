//! # CLI Error Type
//!
//! Failures that end the program. Purchase errors from the core are not in
//! here: the menu prints them and keeps running.

use storefront_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the menu input or writing its output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The initial stock could not be built.
    #[error("Inventory setup failed: {0}")]
    Setup(#[from] CoreError),
}

pub type CliResult<T> = Result<T, CliError>;
