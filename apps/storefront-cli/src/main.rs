//! # Storefront Entry Point
//!
//! ```bash
//! cargo run -p storefront-cli
//!
//! # Custom store name, more verbose logs
//! STOREFRONT_STORE_NAME="Corner Shop" RUST_LOG=debug cargo run -p storefront-cli
//!
//! # No promotions
//! STOREFRONT_PROMOTIONS='[]' cargo run -p storefront-cli
//! ```

use storefront_cli::config::StorefrontConfig;
use storefront_cli::error::CliResult;
use tracing::{info, warn};

fn main() -> CliResult<()> {
    let config = StorefrontConfig::from_env()?;
    storefront_cli::init_tracing(&config);

    match serde_json::to_string(&config) {
        Ok(json) => info!(config = %json, "Configuration loaded"),
        Err(err) => warn!(error = %err, "Configuration loaded but could not be serialized"),
    }

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();

    storefront_cli::run(&config, &mut input, &mut output)
}
