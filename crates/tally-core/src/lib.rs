//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally, a small retail order ledger. It
//! contains all business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Tally Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console Shell (apps/cli)                     │   │
//! │  │    build entities ──► feed ledger ──► render report lines       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  ledger   │  │ validation│   │   │
//! │  │   │ Customer  │  │   Money   │  │  Ledger   │  │   rules   │   │   │
//! │  │   │   Order   │  │ Discount  │  │  reports  │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, OrderItem, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`ledger`] - The aggregate root and its two report queries
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Eager Validation**: Invalid entities can never exist - constructors reject
//!    bad input before any state is built
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tally_core::{Customer, Ledger, Money, Order, OrderItem};
//!
//! let alice = Arc::new(Customer::new(1, "Alice")?);
//!
//! let mut order = Order::new(101, alice)?;
//! order.add_item(OrderItem::new("Mouse USB", 2, Money::from_cents(5000))?);
//!
//! // 2 × 50.00 = 100.00, below the discount threshold
//! assert_eq!(order.final_price(), Money::from_cents(10_000));
//!
//! let mut ledger = Ledger::new();
//! ledger.add_order(order);
//! assert_eq!(ledger.top_spender().unwrap().name, "Alice");
//! # Ok::<(), tally_core::LedgerError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use error::{ErrorCategory, LedgerError, LedgerResult};
pub use ledger::{Ledger, ProductSales, TopSpender};
pub use money::Money;
pub use types::{Customer, Order, OrderItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Pre-discount total an order must STRICTLY exceed to earn the volume
/// discount.
///
/// ## Business Reason
/// Orders worth more than 500.00 get 10% off. The comparison always uses
/// the pre-discount sum: an order at exactly 500.00 pays full price.
pub const DISCOUNT_THRESHOLD: Money = Money::from_cents(50_000);

/// Volume discount in basis points (1000 bps = 10%).
///
/// Applied as a single binary step - there are no discount tiers.
pub const DISCOUNT_BPS: u32 = 1_000;
