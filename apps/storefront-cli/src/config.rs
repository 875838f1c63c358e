//! # Configuration
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup. It serializes to camelCase
//! JSON, which is what the binary logs once loading succeeds.
//!
//! ## Promotion Catalogue
//! `STOREFRONT_PROMOTIONS` replaces the default promotions with a JSON list:
//! ```text
//! [
//!   {"product": "Google Pixel 7",
//!    "promotion": {"type": "percentage_discount", "name": "10% off", "discount_bps": 1000}},
//!   {"product": "Windows License",
//!    "promotion": {"type": "buy_two_get_one_free", "name": "Third One Free!"}}
//! ]
//! ```
//! An empty list (`[]`) opens the store without promotions.

use serde::{Deserialize, Serialize};
use storefront_core::Promotion;
use thiserror::Error;

/// Default tracing filter when neither `RUST_LOG` nor `STOREFRONT_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug";

/// A promotion attached at startup to the first product with this name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromotionAssignment {
    pub product: String,
    pub promotion: Promotion,
}

impl PromotionAssignment {
    pub fn new(product: impl Into<String>, promotion: Promotion) -> Self {
        PromotionAssignment {
            product: product.into(),
            promotion,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Store name shown in the menu banner.
    pub store_name: String,

    /// Fallback tracing filter directive.
    pub log_filter: String,

    /// Per-order maximum for the limited "Shipping" product.
    pub shipping_max_per_order: i64,

    /// Promotions attached to the initial stock.
    pub promotions: Vec<PromotionAssignment>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            store_name: "Best Buy".to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            shipping_max_per_order: 1,
            promotions: vec![
                PromotionAssignment::new(
                    "Bose QuietComfort Earbuds",
                    Promotion::second_item_half_price("Second Half price!"),
                ),
                PromotionAssignment::new(
                    "Google Pixel 7",
                    Promotion::buy_two_get_one_free("Third One Free!"),
                ),
                PromotionAssignment::new("Windows License", Promotion::percentage("30% off!", 30)),
            ],
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from the process environment.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: store name
    /// - `STOREFRONT_LOG`: fallback log filter
    /// - `STOREFRONT_SHIPPING_MAX`: shipping per-order maximum
    /// - `STOREFRONT_PROMOTIONS`: JSON promotion catalogue
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Split from [`StorefrontConfig::from_env`] so tests do not have to
    /// mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StorefrontConfig::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(log_filter) = lookup("STOREFRONT_LOG") {
            config.log_filter = log_filter;
        }

        if let Some(raw) = lookup("STOREFRONT_SHIPPING_MAX") {
            config.shipping_max_per_order = raw
                .trim()
                .parse()
                .ok()
                .filter(|max: &i64| *max > 0)
                .ok_or_else(|| ConfigError::InvalidValue("STOREFRONT_SHIPPING_MAX".to_string()))?;
        }

        if let Some(raw) = lookup("STOREFRONT_PROMOTIONS") {
            config.promotions = serde_json::from_str(&raw)
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_PROMOTIONS".to_string()))?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.store_name, "Best Buy");
        assert_eq!(config.shipping_max_per_order, 1);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_STORE_NAME", "Corner Shop"),
            ("STOREFRONT_LOG", "warn"),
            ("STOREFRONT_SHIPPING_MAX", " 3 "),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.log_filter, "warn");
        assert_eq!(config.shipping_max_per_order, 3);
    }

    #[test]
    fn test_promotions_from_json() {
        let json = r#"[
            {"product": "Google Pixel 7",
             "promotion": {"type": "percentage_discount", "name": "10% off", "discount_bps": 1000}}
        ]"#;
        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_PROMOTIONS", json)])).unwrap();

        assert_eq!(
            config.promotions,
            vec![PromotionAssignment::new(
                "Google Pixel 7",
                Promotion::percentage("10% off", 10)
            )]
        );

        let config =
            StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_PROMOTIONS", "[]")])).unwrap();
        assert!(config.promotions.is_empty());
    }

    #[test]
    fn test_invalid_promotions() {
        for raw in [
            "not json",
            r#"[{"product": "Google Pixel 7"}]"#,
            r#"[{"product": "Google Pixel 7", "promotion": {"type": "free_lunch", "name": "x"}}]"#,
        ] {
            let err = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_PROMOTIONS", raw)]))
                .unwrap_err();
            assert_eq!(err, ConfigError::InvalidValue("STOREFRONT_PROMOTIONS".to_string()));
        }
    }

    #[test]
    fn test_serializes_for_startup_log() {
        let json = serde_json::to_value(StorefrontConfig::default()).unwrap();

        assert_eq!(json["storeName"], "Best Buy");
        assert_eq!(json["shippingMaxPerOrder"], 1);
        assert_eq!(json["promotions"].as_array().unwrap().len(), 3);
        assert_eq!(json["promotions"][2]["product"], "Windows License");
        assert_eq!(json["promotions"][2]["promotion"]["type"], "percentage_discount");
        assert_eq!(json["promotions"][2]["promotion"]["discount_bps"], 3000);
    }

    #[test]
    fn test_invalid_shipping_max() {
        for raw in ["lots", "0", "-2"] {
            let err = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_SHIPPING_MAX", raw)]))
                .unwrap_err();
            assert_eq!(err.to_string(), "Invalid value for STOREFRONT_SHIPPING_MAX");
        }
    }
}
