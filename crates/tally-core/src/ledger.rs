//! # Ledger Module
//!
//! The aggregate root: holds all orders and derives the two report views.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Ledger Data Flow                                │
//! │                                                                         │
//! │  Customer ─┐                                                            │
//! │            ├──► Order ──► add_order() ──► Vec<Order> (append-only)      │
//! │  OrderItem ┘                                   │                        │
//! │                                                ├──► top_spender()       │
//! │                                                │    group by customer   │
//! │                                                │    id, sum final price │
//! │                                                │                        │
//! │                                                └──► popular_products()  │
//! │                                                     group by product    │
//! │                                                     name, sum quantity  │
//! │                                                                         │
//! │  Both queries fold over the CURRENT order sequence on every call.       │
//! │  Nothing is cached; adding an order is immediately visible.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Order;

// =============================================================================
// Report Rows
// =============================================================================

/// The top-spending customer and what they spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSpender {
    /// Aggregation identity of the winning group.
    pub customer_id: i64,
    /// Display name from the first order seen for that customer id.
    pub name: String,
    /// Sum of final prices across the group's orders.
    pub total: Money,
}

/// One row of the popularity ranking: a product and its units sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    /// Exact (post-trim) product name.
    pub product_name: String,
    /// Total quantity across all orders.
    pub units_sold: i64,
}

// =============================================================================
// Ledger
// =============================================================================

/// Holds all orders and computes the spending and popularity rankings.
///
/// ## Ownership
/// The ledger exclusively owns its order sequence; customers stay shared
/// (`Arc`) through the orders that reference them.
///
/// ## Invariants
/// - The order sequence is append-only: orders are added, never removed or
///   mutated
/// - Aggregates are computed on demand by traversing the orders - there is
///   no cached state to go stale
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    orders: Vec<Order>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger { orders: Vec::new() }
    }

    /// Appends an order to the ledger.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// All orders in insertion order.
    #[inline]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Number of orders recorded.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Checks if the ledger holds no orders.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// The customer whose summed final prices are maximal.
    ///
    /// ## Grouping
    /// Orders are grouped by `customer.id`, NOT by instance: two distinct
    /// `Customer` values sharing an id merge into one group, because the
    /// same real customer may be represented by separate instances across
    /// orders. The group's display name is the one attached to the first
    /// order encountered for that id.
    ///
    /// ## Tie-break
    /// First-seen-in-insertion-order wins ties - the traversal is stable
    /// and a later group only replaces the leader on a strictly greater
    /// total.
    ///
    /// Returns `None` when the ledger has no orders.
    pub fn top_spender(&self) -> Option<TopSpender> {
        // Linear-probe accumulation keeps groups in first-seen order, which
        // is what makes the tie-break deterministic.
        let mut groups: Vec<TopSpender> = Vec::new();

        for order in &self.orders {
            let customer = order.customer();
            let price = order.final_price();

            match groups.iter_mut().find(|g| g.customer_id == customer.id()) {
                Some(group) => group.total += price,
                None => groups.push(TopSpender {
                    customer_id: customer.id(),
                    name: customer.name().to_string(),
                    total: price,
                }),
            }
        }

        groups
            .into_iter()
            .reduce(|best, g| if g.total > best.total { g } else { best })
    }

    /// Product names ranked by total quantity sold, descending.
    ///
    /// Flattens every line item across all orders, groups by exact
    /// (post-trim) product name and sums quantities. The sort is stable, so
    /// products with equal quantities retain their first-encountered
    /// relative order. Empty ledger → empty vec.
    pub fn popular_products(&self) -> Vec<ProductSales> {
        let mut rows: Vec<ProductSales> = Vec::new();

        for item in self.orders.iter().flat_map(|o| o.items()) {
            match rows
                .iter_mut()
                .find(|r| r.product_name == item.product_name())
            {
                Some(row) => row.units_sold += item.quantity(),
                None => rows.push(ProductSales {
                    product_name: item.product_name().to_string(),
                    units_sold: item.quantity(),
                }),
            }
        }

        // Vec::sort_by is stable: equal quantities keep insertion order
        rows.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
        rows
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
