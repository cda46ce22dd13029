//! # Validation Module
//!
//! Checks applied at the two points where the user commits to something.
//!
//! ## Validation Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      When Validation Runs                               │
//! │                                                                         │
//! │  "Add order" ──► add_order(item, cost, person)                          │
//! │                  ├── item blank?       → InvalidOrderEntry              │
//! │                  ├── cost not a number → InvalidOrderEntry              │
//! │                  ├── cost <= 0?        → InvalidOrderEntry              │
//! │                  └── OK → new Order (caller appends it)                 │
//! │                                                                         │
//! │  Any edit ─────► allocate() only. Running totals never block.          │
//! │                                                                         │
//! │  "Calculate" ──► validate_orders(orders)                                │
//! │                  ├── any cost <= 0?    → InvalidOrderCosts              │
//! │                  └── OK → totals are final                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::coerce;
use crate::error::ValidationError;
use crate::types::Order;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Builds a new order from the raw "add order" inputs.
///
/// The item name is trimmed and must not be empty. The cost must parse as a
/// number and be at least one cent after rounding. Nothing is appended
/// anywhere: the caller owns the order list.
///
/// ```rust
/// use billsplit_core::{add_order, Money};
///
/// let order = add_order("Soda", "5.50", 1).unwrap();
/// assert_eq!(order.item, "Soda");
/// assert_eq!(order.cost, Money::from_cents(550));
/// assert_eq!(order.person, 1);
///
/// assert!(add_order("", "5", 0).is_err());
/// assert!(add_order("Soda", "-1", 0).is_err());
/// assert!(add_order("Soda", "abc", 0).is_err());
/// ```
pub fn add_order(item: &str, cost: &str, person: usize) -> ValidationResult<Order> {
    let item = item.trim();
    if item.is_empty() {
        return Err(ValidationError::InvalidOrderEntry { field: "item" });
    }

    let cost = coerce::parse_amount(cost)
        .filter(|cost| cost.is_positive())
        .ok_or(ValidationError::InvalidOrderEntry { field: "cost" })?;

    Ok(Order::new(item, cost, person))
}

/// Checks that every order has a positive cost before the bill is accepted.
///
/// Independent of [`allocate`](crate::allocate): running totals are still
/// computed while this check fails.
pub fn validate_orders(orders: &[Order]) -> ValidationResult<()> {
    let positions: Vec<usize> = orders
        .iter()
        .enumerate()
        .filter(|(_, order)| !order.cost.is_positive())
        .map(|(position, _)| position)
        .collect();

    if positions.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::InvalidOrderCosts { positions })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
