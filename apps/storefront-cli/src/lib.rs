//! # Storefront CLI Library
//!
//! Wiring for the `storefront` binary: configuration, logging, initial
//! stock and the menu loop.
//!
//! ## Module Organization
//! ```text
//! storefront_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── inventory.rs    ◄─── Initial stock
//! ├── menu.rs         ◄─── Interactive menu loop
//! └── error.rs        ◄─── CLI error type
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod menu;

use std::io::{BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::StorefrontConfig;
use error::CliResult;

/// Builds the store and runs the menu over the given input and output.
///
/// ## Startup Sequence
/// ```text
/// 1. Build initial stock (config decides the shipping limit)
/// 2. Run menu until Quit or end of input
/// ```
pub fn run<R, W>(config: &StorefrontConfig, input: &mut R, output: &mut W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    let store = inventory::build_store(config)?;
    info!(store = %config.store_name, "Storefront open");

    menu::run(&store, config, input, output)?;

    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG` wins when set
/// - otherwise `config.log_filter` (`STOREFRONT_LOG`, default `info,storefront=debug`)
///
/// Logs go to stderr so the menu on stdout stays readable.
pub fn init_tracing(config: &StorefrontConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_run_end_to_end() {
        let config = StorefrontConfig {
            store_name: "Corner Shop".to_string(),
            ..StorefrontConfig::default()
        };
        let mut input = Cursor::new(b"2\n3\nShipping\n1\nq\n2\n4\n".to_vec());
        let mut output = Vec::new();

        run(&config, &mut input, &mut output).unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.starts_with("   Corner Shop\n"));
        assert!(out.contains("Total of 1100 items in store"));
        assert!(out.contains("Order cost: $10.00"));
        assert!(out.contains("Total of 1099 items in store"));
    }
}
