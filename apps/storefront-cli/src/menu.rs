//! # Menu Loop
//!
//! The interactive front end over a [`Store`].
//!
//! ## Menu
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. List all products in store ──► store.get_all_products()             │
//! │  2. Show total amount in store ──► store.get_total_quantity()           │
//! │  3. Make an order ───────────────► resolve names, pre-check stock,      │
//! │                                    store.order(shopping_list)           │
//! │  4. Quit                                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input and output are generic so tests can drive the loop with in-memory
//! buffers. End of input behaves like choosing Quit.

use std::io::{BufRead, Write};

use storefront_core::{OrderLine, StockPolicy, Store};
use tracing::{debug, info};

use crate::config::StorefrontConfig;
use crate::error::CliResult;

const MENU: &str = "\
Menu:
1. List all products in store
2. Show total amount in store
3. Make an order
4. Quit";

/// Runs the menu until the user quits or input ends.
pub fn run<R, W>(store: &Store, config: &StorefrontConfig, input: &mut R, output: &mut W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "   {}", config.store_name)?;
    writeln!(output, "   {}", "-".repeat(config.store_name.chars().count()))?;

    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = prompt(input, output, "Enter your choice (1-4): ")? else {
            debug!("Input closed, leaving menu");
            break;
        };

        match choice.as_str() {
            "1" => list_products(store, output)?,
            "2" => {
                writeln!(output, "Total of {} items in store", store.get_total_quantity())?;
            }
            "3" => make_order(store, input, output)?,
            "4" => {
                writeln!(output, "Exiting...")?;
                break;
            }
            other => {
                debug!(choice = %other, "Invalid menu choice");
                writeln!(output, "Invalid choice. Please try again.")?;
            }
        }
    }

    Ok(())
}

fn list_products<W: Write>(store: &Store, output: &mut W) -> CliResult<()> {
    for (index, product) in store.get_all_products().iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, product.show())?;
    }
    Ok(())
}

/// Collects a shopping list, then submits it as one order.
///
/// Names are resolved with first-match lookup. Unknown names, unparsable or
/// non-positive quantities, and quantities above the current stock of a
/// stocked product are rejected here, before the core sees them.
fn make_order<R, W>(store: &Store, input: &mut R, output: &mut W) -> CliResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut shopping_list: Vec<OrderLine> = Vec::new();

    loop {
        let Some(name) = prompt(input, output, "Enter the product name (or 'q' to finish): ")? else {
            break;
        };
        if name.is_empty() || name == "q" {
            break;
        }

        let Some(raw_quantity) = prompt(input, output, "Enter the quantity: ")? else {
            break;
        };

        let Some(product) = store.find_product(&name) else {
            writeln!(output, "Product not found.")?;
            continue;
        };

        let quantity = match raw_quantity.parse::<i64>() {
            Ok(quantity) if quantity > 0 => quantity,
            _ => {
                writeln!(output, "Invalid quantity.")?;
                continue;
            }
        };

        let stocked = product.stock_policy() != StockPolicy::NonStocked;
        if stocked && quantity > product.quantity() {
            writeln!(output, "Not enough stock available.")?;
            continue;
        }

        debug!(product = %name, quantity, "Added to shopping list");
        shopping_list.push(OrderLine::new(product, quantity));
    }

    if shopping_list.is_empty() {
        return Ok(());
    }

    match store.order(&shopping_list) {
        Ok(total) => {
            info!(lines = shopping_list.len(), total = %total, "Order placed from menu");
            writeln!(output, "Order cost: {}", total)?;
        }
        Err(err) => {
            writeln!(output, "Error while making order! {}", err)?;
        }
    }

    Ok(())
}

/// Prints `message`, reads one line and returns it trimmed.
/// `None` means input is exhausted.
fn prompt<R, W>(input: &mut R, output: &mut W, message: &str) -> CliResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
