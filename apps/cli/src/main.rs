//! # Tally CLI
//!
//! Console report shell over the tally-core order ledger.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally CLI                                      │
//! │                                                                         │
//! │  build entities ───► Ledger ───► top_spender / popular_products         │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                              stdout report lines                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each run starts from an empty ledger; there is no persisted state. Log
//! verbosity is controlled with `RUST_LOG` (e.g. `RUST_LOG=debug`).

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use tally_core::{Customer, ErrorCategory, Ledger, LedgerError, Money, Order, OrderItem};

fn main() -> ExitCode {
    // Initialize tracing; default to info unless RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    info!("Starting Tally report run");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Report range and argument violations distinctly; the core
            // never swallows either
            match err.category() {
                ErrorCategory::Range => error!(%err, "value out of range"),
                ErrorCategory::Argument => error!(%err, "invalid argument"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), LedgerError> {
    let ledger = build_sample_ledger()?;

    println!("=== Orders ===");
    for order in ledger.orders() {
        // "Order <id> (<customerName>): <amount> EUR"
        println!(
            "Order {} ({}): {}",
            order.id(),
            order.customer().name(),
            order.final_price()
        );
    }

    println!();
    println!("=== Top spender ===");
    match ledger.top_spender() {
        Some(top) => println!("{} ({})", top.name, top.total),
        None => println!("not found"),
    }

    println!();
    println!("=== Popular products ===");
    for row in ledger.popular_products() {
        // "<name>: <quantity> units sold"
        println!("{}: {} units sold", row.product_name, row.units_sold);
    }

    Ok(())
}

/// Builds the demo dataset: Alice's small order and Bob's discounted one.
fn build_sample_ledger() -> Result<Ledger, LedgerError> {
    let alice = Arc::new(Customer::new(1, "Alice")?);
    let bob = Arc::new(Customer::new(2, "Bob")?);

    let mut order_101 = Order::new(101, alice)?;
    order_101.add_item(OrderItem::new("Mouse USB", 2, Money::from_cents(5000))?);

    let mut order_102 = Order::new(102, bob)?;
    order_102.add_item(OrderItem::new("Laptop", 1, Money::from_cents(100_000))?);
    order_102.add_item(OrderItem::new("Mouse USB", 1, Money::from_cents(5000))?);

    let mut ledger = Ledger::new();
    ledger.add_order(order_101);
    ledger.add_order(order_102);

    debug!(orders = ledger.order_count(), "sample ledger built");
    Ok(ledger)
}
