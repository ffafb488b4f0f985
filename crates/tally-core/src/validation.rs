//! # Validation Module
//!
//! Input validation utilities for tally-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Strategy                                │
//! │                                                                         │
//! │  Every constructor validates EAGERLY:                                   │
//! │                                                                         │
//! │  Customer::new ──► validate_entity_id + validate_name                   │
//! │  OrderItem::new ──► validate_name + validate_quantity                   │
//! │                     + validate_unit_price                               │
//! │  Order::new ──► validate_entity_id                                      │
//! │                                                                         │
//! │  Consequence: an invalid entity can never exist. Aggregation code       │
//! │  downstream (Order totals, Ledger rankings) never re-checks input.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_name, validate_quantity};
//!
//! let trimmed = validate_name("product name", "  Mouse USB  ")?;
//! assert_eq!(trimmed, "Mouse USB");
//!
//! validate_quantity(5)?;
//! # Ok::<(), tally_core::LedgerError>(())
//! ```

use crate::error::{LedgerError, LedgerResult};
use crate::money::Money;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required display name (customer name, product name).
///
/// ## Rules
/// - Must not be empty or all-whitespace
/// - Surrounding whitespace is trimmed
///
/// ## Returns
/// The trimmed name on success - callers store the trimmed value so that
/// grouping by product name is insensitive to stray whitespace.
pub fn validate_name(field: &'static str, name: &str) -> LedgerResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(LedgerError::Required { field });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an entity id (customer id, order id).
///
/// ## Rules
/// - Must be strictly positive
pub fn validate_entity_id(field: &'static str, id: i64) -> LedgerResult<()> {
    if id <= 0 {
        return Err(LedgerError::MustBePositive { field, value: id });
    }

    Ok(())
}

/// Validates an item quantity.
///
/// ## Rules
/// - Must be strictly positive
pub fn validate_quantity(qty: i64) -> LedgerResult<()> {
    if qty <= 0 {
        return Err(LedgerError::MustBePositive {
            field: "quantity",
            value: qty,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> LedgerResult<()> {
    if price.is_negative() {
        return Err(LedgerError::NegativeAmount {
            field: "unit price",
            cents: price.cents(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
