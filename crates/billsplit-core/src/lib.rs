//! # billsplit-core: Pure Allocation Logic for billsplit
//!
//! This crate splits a shared bill across friends. Each friend pays for the
//! items they ordered plus a share of tip and tax proportional to what they
//! spent. Every function is pure: no I/O, no logging, no hidden state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        billsplit Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (billsplit)                         │   │
//! │  │   Session (orders + raw inputs) ──► snapshot on every edit      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &[Order], BillParameters               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ billsplit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  types   │ │  money   │ │  coerce  │ │   allocation     │  │   │
//! │  │   │  Order   │ │  Money   │ │ raw→cents│ │ grand total      │  │   │
//! │  │   │  Bill    │ │ rounding │ │ raw→tip %│ │ subtotal, shares │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                      ┌──────────────┐                           │   │
//! │  │                      │  validation  │ add_order, validate_orders│   │
//! │  │                      └──────────────┘                           │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Order, BillParameters, AllocationResult)
//! - [`money`] - Money type stored as integer cents (no floating point!)
//! - [`coerce`] - Lenient parsing of user-entered numbers
//! - [`allocation`] - Grand total, subtotal and per-friend shares
//! - [`validation`] - Order entry and submission checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use billsplit_core::{allocate, add_order, AllocationResult, BillParameters};
//!
//! let orders = vec![
//!     add_order("Pasta", "30", 0).unwrap(),
//!     add_order("Steak", "70", 1).unwrap(),
//! ];
//! let bill = BillParameters::from_raw("100", "10", "0", 2);
//!
//! match allocate(&orders, &bill) {
//!     AllocationResult::Valid { per_participant_total } => {
//!         assert_eq!(per_participant_total[0].to_plain_string(), "33.00");
//!         assert_eq!(per_participant_total[1].to_plain_string(), "77.00");
//!     }
//!     AllocationResult::Invalid { reason } => panic!("{reason}"),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocation;
pub mod coerce;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use allocation::{
    allocate, compute_grand_total, compute_subtotal, compute_unassigned, AllocationSummary,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{round_cents, Money};
pub use rust_decimal::Decimal;
pub use types::*;
pub use validation::{add_order, validate_orders};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Message shown when a new order has no item name or an unusable cost.
pub const INVALID_ORDER_ENTRY_MESSAGE: &str = "Please enter a valid item name and cost.";

/// Message shown when submitting a bill whose orders include a non-positive cost.
pub const INVALID_ORDER_COSTS_MESSAGE: &str = "Please enter valid costs for all orders.";

/// Message shown when the bill is split between zero friends.
pub const NO_PARTICIPANTS_MESSAGE: &str = "Number of friends must be at least 1";

/// Largest amount accepted for an order cost, the bill or the tax
/// ($100,000,000,000.00). Strict parsing rejects anything larger; lenient
/// parsing treats it as zero.
pub const MAX_AMOUNT: Money = Money::from_cents(10_000_000_000_000);

/// Largest accepted tip percentage. Larger tips count as no tip.
pub const MAX_TIP_PERCENT: u32 = 1_000;

/// Largest number of friends a bill can be split between.
pub const MAX_PARTICIPANTS: usize = 1_000;
