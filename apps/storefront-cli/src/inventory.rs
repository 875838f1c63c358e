//! # Initial Stock
//!
//! Builds the inventory the storefront opens with.
//!
//! ```text
//! ┌──────────────────────────────┬─────────┬────────┬──────────────────────┐
//! │ Product                      │ Price   │ Stock  │ Promotion            │
//! ├──────────────────────────────┼─────────┼────────┼──────────────────────┤
//! │ MacBook Air M2               │ $1450   │ 100    │ -                    │
//! │ Bose QuietComfort Earbuds    │ $250    │ 500    │ Second Half price!   │
//! │ Google Pixel 7               │ $500    │ 250    │ Third One Free!      │
//! │ Windows License              │ $125    │ ∞      │ 30% off!             │
//! │ Shipping                     │ $10     │ 250    │ - (max per order)    │
//! └──────────────────────────────┴─────────┴────────┴──────────────────────┘
//! ```
//!
//! The promotion column is the default catalogue; `config.promotions` decides
//! what is actually attached.

use std::rc::Rc;

use storefront_core::{CoreResult, Money, Product, SharedProduct, Store};
use tracing::{debug, info, warn};

use crate::config::StorefrontConfig;

/// Creates the opening product list with the configured promotions attached.
///
/// Each assignment goes to the first product with that name. Assignments
/// naming an unknown product are skipped with a warning; a later assignment
/// to the same product replaces an earlier one.
pub fn initial_stock(config: &StorefrontConfig) -> CoreResult<Vec<SharedProduct>> {
    let mut products = vec![
        Product::new("MacBook Air M2", Money::from_major(1450), 100)?,
        Product::new("Bose QuietComfort Earbuds", Money::from_major(250), 500)?,
        Product::new("Google Pixel 7", Money::from_major(500), 250)?,
        Product::non_stocked("Windows License", Money::from_major(125))?,
        Product::limited(
            "Shipping",
            Money::from_major(10),
            250,
            config.shipping_max_per_order,
        )?,
    ];

    for assignment in &config.promotions {
        match products.iter_mut().find(|p| p.name() == assignment.product) {
            Some(product) => {
                debug!(
                    product = %assignment.product,
                    promotion = assignment.promotion.name(),
                    "Promotion attached"
                );
                product.set_promotion(Rc::new(assignment.promotion.clone()));
            }
            None => {
                warn!(product = %assignment.product, "Promotion for unknown product skipped");
            }
        }
    }

    Ok(products.into_iter().map(SharedProduct::new).collect())
}

/// Creates the store holding [`initial_stock`].
pub fn build_store(config: &StorefrontConfig) -> CoreResult<Store> {
    let store = Store::new(initial_stock(config)?);
    info!(
        products = store.products().len(),
        total_quantity = store.get_total_quantity(),
        "Initial stock loaded"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PromotionAssignment;
    use storefront_core::{Promotion, StockPolicy};

    #[test]
    fn test_initial_stock() {
        let store = build_store(&StorefrontConfig::default()).unwrap();

        assert_eq!(store.products().len(), 5);
        assert_eq!(store.get_all_products().len(), 5);
        // non-stocked license contributes nothing
        assert_eq!(store.get_total_quantity(), 100 + 500 + 250 + 250);
    }

    #[test]
    fn test_variants_and_promotions() {
        let store = build_store(&StorefrontConfig::default()).unwrap();

        let license = store.find_product("Windows License").unwrap();
        assert_eq!(license.stock_policy(), StockPolicy::NonStocked);
        assert_eq!(license.buy(2).unwrap(), Money::from_major(175));

        let shipping = store.find_product("Shipping").unwrap();
        assert_eq!(shipping.stock_policy(), StockPolicy::Limited { maximum: 1 });

        let pixel = store.find_product("Google Pixel 7").unwrap();
        assert_eq!(pixel.buy(3).unwrap(), Money::from_major(1000));
    }

    #[test]
    fn test_promotions_from_config() {
        let config = StorefrontConfig {
            promotions: vec![
                PromotionAssignment::new("MacBook Air M2", Promotion::percentage("10% off", 10)),
                PromotionAssignment::new("Toaster", Promotion::percentage("50% off", 50)),
            ],
            ..StorefrontConfig::default()
        };
        let store = build_store(&config).unwrap();

        let macbook = store.find_product("MacBook Air M2").unwrap();
        assert_eq!(macbook.buy(1).unwrap(), Money::from_major(1305));

        // defaults are replaced, not merged
        let pixel = store.find_product("Google Pixel 7").unwrap();
        assert_eq!(pixel.buy(3).unwrap(), Money::from_major(1500));
        assert!(store.find_product("Toaster").is_none());
    }

    #[test]
    fn test_no_promotions() {
        let config = StorefrontConfig {
            promotions: Vec::new(),
            ..StorefrontConfig::default()
        };
        let store = build_store(&config).unwrap();
        for product in store.products() {
            assert!(product.show().ends_with("Promotion: No promotion"));
        }
    }

    #[test]
    fn test_shipping_max_from_config() {
        let config = StorefrontConfig {
            shipping_max_per_order: 4,
            ..StorefrontConfig::default()
        };
        let store = build_store(&config).unwrap();
        let shipping = store.find_product("Shipping").unwrap();
        assert_eq!(shipping.stock_policy(), StockPolicy::Limited { maximum: 4 });
    }
}
