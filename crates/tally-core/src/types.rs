//! # Domain Types
//!
//! Core domain types for the order ledger.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Customer     │   │    OrderItem    │   │      Order      │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (i64 > 0)   │   │  product_name   │   │  id (i64 > 0)   │        │
//! │  │  name           │   │  quantity       │   │  customer (Arc) │        │
//! │  │                 │   │  unit_price     │   │  items (append) │        │
//! │  └────────┬────────┘   └────────┬────────┘   └─────────────────┘        │
//! │           │                     │                     ▲                 │
//! │           │  shared (Arc)       │  owned, append-only │                 │
//! │           └─────────────────────┴─────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Rules
//! - A `Customer` is identified by its `id`, never by reference identity:
//!   two distinct `Customer` values with the same id represent the same
//!   person, and the ledger merges them into one spending group.
//! - All entities are immutable after construction, except that an `Order`
//!   grows by appending items. Nothing is ever removed.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LedgerResult;
use crate::money::Money;
use crate::validation::{validate_entity_id, validate_name, validate_quantity, validate_unit_price};
use crate::{DISCOUNT_BPS, DISCOUNT_THRESHOLD};

// =============================================================================
// Customer
// =============================================================================

/// A customer identity record.
///
/// Immutable after construction. Equality for aggregation purposes is by
/// [`Customer::id`] - see [`crate::Ledger::top_spender`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: i64,
    name: String,
}

impl Customer {
    /// Creates a customer after validating its fields.
    ///
    /// ## Errors
    /// - `MustBePositive` if `id <= 0`
    /// - `Required` if `name` is empty or all-whitespace
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::Customer;
    ///
    /// let alice = Customer::new(1, "Alice")?;
    /// assert_eq!(alice.id(), 1);
    /// assert_eq!(alice.name(), "Alice");
    /// # Ok::<(), tally_core::LedgerError>(())
    /// ```
    pub fn new(id: i64, name: &str) -> LedgerResult<Self> {
        validate_entity_id("customer id", id)?;
        let name = validate_name("customer name", name)?;

        Ok(Customer { id, name })
    }

    /// The aggregation identity of this customer.
    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name (trimmed at construction).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A purchased line: product, quantity, unit price.
///
/// Immutable after construction. The product name is stored trimmed so
/// popularity grouping is insensitive to stray whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    product_name: String,
    quantity: i64,
    unit_price: Money,
}

impl OrderItem {
    /// Creates a line item after validating its fields.
    ///
    /// ## Errors
    /// - `Required` if `product_name` is empty or all-whitespace
    /// - `MustBePositive` if `quantity <= 0`
    /// - `NegativeAmount` if `unit_price < 0`
    pub fn new(product_name: &str, quantity: i64, unit_price: Money) -> LedgerResult<Self> {
        let product_name = validate_name("product name", product_name)?;
        validate_quantity(quantity)?;
        validate_unit_price(unit_price)?;

        Ok(OrderItem {
            product_name,
            quantity,
            unit_price,
        })
    }

    /// Product name (trimmed at construction).
    #[inline]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Units purchased on this line.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Price per unit.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Line total: `quantity × unit_price`, exact - no rounding at this
    /// level.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Money, OrderItem};
    ///
    /// let line = OrderItem::new("Mouse USB", 2, Money::from_cents(5000))?;
    /// assert_eq!(line.total_price(), Money::from_cents(10_000));
    /// # Ok::<(), tally_core::LedgerError>(())
    /// ```
    #[inline]
    pub fn total_price(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer's cart: an append-only list of line items.
///
/// ## Invariants
/// - `id > 0`, validated at construction
/// - The item sequence starts empty and only grows via [`Order::add_item`];
///   insertion order is preserved and duplicate product names are kept as
///   distinct lines (no merging)
/// - [`Order::final_price`] is derived at call time, never cached
///
/// The customer is shared, not owned: the same `Arc<Customer>` may back any
/// number of orders, and separate `Customer` instances with the same id
/// still count as one person in the ledger's rankings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: i64,
    customer: Arc<Customer>,
    items: Vec<OrderItem>,
    /// When the order was opened.
    opened_at: DateTime<Utc>,
}

impl Order {
    /// Creates an empty order for a customer.
    ///
    /// ## Errors
    /// - `MustBePositive` if `id <= 0`
    pub fn new(id: i64, customer: Arc<Customer>) -> LedgerResult<Self> {
        validate_entity_id("order id", id)?;

        Ok(Order {
            id,
            customer,
            items: Vec::new(),
            opened_at: Utc::now(),
        })
    }

    #[inline]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[inline]
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Line items in insertion order.
    #[inline]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    #[inline]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Appends a line item.
    ///
    /// Each call adds a distinct line, even for a product name already
    /// present - lines are never merged and never removed.
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Sum of line totals before any discount.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(OrderItem::total_price).sum()
    }

    /// The order's final price: item-sum with the volume discount applied.
    ///
    /// ## Discount Rule
    /// ```text
    /// subtotal ──► subtotal > 500.00 EUR ? ──► yes ──► 10% off, bankers-rounded
    ///                      │
    ///                      └─────────────────► no ───► subtotal unchanged
    /// ```
    /// The threshold comparison uses the PRE-discount sum, and the discount
    /// is binary and single-step - there are no tiers. Computed fresh on
    /// every call, so it always reflects the current items.
    pub fn final_price(&self) -> Money {
        let subtotal = self.subtotal();

        if subtotal > DISCOUNT_THRESHOLD {
            subtotal.apply_discount_bps(DISCOUNT_BPS)
        } else {
            subtotal
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCategory, LedgerError};

    fn customer(id: i64, name: &str) -> Arc<Customer> {
        Arc::new(Customer::new(id, name).unwrap())
    }

    #[test]
    fn test_customer_validation() {
        assert!(Customer::new(1, "Alice").is_ok());

        assert_eq!(
            Customer::new(0, "Alice").unwrap_err().category(),
            ErrorCategory::Range
        );
        assert_eq!(
            Customer::new(-3, "Alice").unwrap_err().category(),
            ErrorCategory::Range
        );
        assert_eq!(
            Customer::new(1, "   ").unwrap_err().category(),
            ErrorCategory::Argument
        );
    }

    #[test]
    fn test_customer_name_is_trimmed() {
        let c = Customer::new(1, "  Alice  ").unwrap();
        assert_eq!(c.name(), "Alice");
    }

    #[test]
    fn test_item_total_price_is_exact() {
        let item = OrderItem::new("Mouse USB", 2, Money::from_cents(5000)).unwrap();
        assert_eq!(item.total_price(), Money::from_cents(10_000));

        let item = OrderItem::new("Widget", 7, Money::from_cents(333)).unwrap();
        assert_eq!(item.total_price(), Money::from_cents(2331));
    }

    #[test]
    fn test_item_rejects_bad_input() {
        // Negative quantity is a range violation, not an argument one
        let err = OrderItem::new("Hacked", -5, Money::from_cents(10_000)).unwrap_err();
        assert!(matches!(err, LedgerError::MustBePositive { .. }));
        assert_eq!(err.category(), ErrorCategory::Range);

        assert!(OrderItem::new("Widget", 0, Money::from_cents(100)).is_err());
        assert!(OrderItem::new("", 1, Money::from_cents(100)).is_err());
        assert!(OrderItem::new("Widget", 1, Money::from_cents(-1)).is_err());

        // Zero price is allowed (free item)
        assert!(OrderItem::new("Sample", 1, Money::zero()).is_ok());
    }

    #[test]
    fn test_item_trims_product_name() {
        let item = OrderItem::new("  Mouse USB ", 1, Money::from_cents(5000)).unwrap();
        assert_eq!(item.product_name(), "Mouse USB");
    }

    #[test]
    fn test_order_validation() {
        assert!(Order::new(101, customer(1, "Alice")).is_ok());
        assert_eq!(
            Order::new(0, customer(1, "Alice")).unwrap_err().category(),
            ErrorCategory::Range
        );
    }

    #[test]
    fn test_order_keeps_duplicate_lines() {
        let mut order = Order::new(101, customer(1, "Alice")).unwrap();
        order.add_item(OrderItem::new("Mouse USB", 1, Money::from_cents(5000)).unwrap());
        order.add_item(OrderItem::new("Mouse USB", 2, Money::from_cents(5000)).unwrap());

        // Two distinct lines, insertion order preserved
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.items()[0].quantity(), 1);
        assert_eq!(order.items()[1].quantity(), 2);
    }

    #[test]
    fn test_final_price_no_discount() {
        // Scenario A: 2 × Mouse USB @ 50.00 = 100.00, below threshold
        let mut order = Order::new(101, customer(1, "Alice")).unwrap();
        order.add_item(OrderItem::new("Mouse USB", 2, Money::from_cents(5000)).unwrap());

        assert_eq!(order.final_price(), Money::from_cents(10_000));
    }

    #[test]
    fn test_final_price_with_discount() {
        // Scenario B: 1 × Laptop @ 1000.00 + 1 × Mouse USB @ 50.00
        // Pre-discount 1050.00 > 500.00 → 945.00
        let mut order = Order::new(102, customer(2, "Bob")).unwrap();
        order.add_item(OrderItem::new("Laptop", 1, Money::from_cents(100_000)).unwrap());
        order.add_item(OrderItem::new("Mouse USB", 1, Money::from_cents(5000)).unwrap());

        assert_eq!(order.final_price(), Money::from_cents(94_500));
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 500.00 gets NO discount - the bound is strict
        let mut order = Order::new(103, customer(1, "Alice")).unwrap();
        order.add_item(OrderItem::new("Gift Card", 1, Money::from_cents(50_000)).unwrap());
        assert_eq!(order.final_price(), Money::from_cents(50_000));

        // One cent over the threshold does
        order.add_item(OrderItem::new("Sticker", 1, Money::from_cents(1)).unwrap());
        assert_eq!(order.final_price(), Money::from_cents(45_001));
    }

    #[test]
    fn test_final_price_is_idempotent_and_live() {
        let mut order = Order::new(104, customer(1, "Alice")).unwrap();
        order.add_item(OrderItem::new("Mouse USB", 2, Money::from_cents(5000)).unwrap());

        // Idempotent without intervening mutation
        assert_eq!(order.final_price(), order.final_price());

        // Reflects new items at call time (no caching)
        order.add_item(OrderItem::new("Laptop", 1, Money::from_cents(100_000)).unwrap());
        assert_eq!(order.final_price(), Money::from_cents(94_500));
    }

    #[test]
    fn test_empty_order_is_free() {
        let order = Order::new(105, customer(1, "Alice")).unwrap();
        assert_eq!(order.final_price(), Money::zero());
    }
}
