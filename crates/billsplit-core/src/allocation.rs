//! # Allocation
//!
//! Splits the grand total between friends.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  orders ──┬──► totals[person] += cost   (only person < friends)        │
//! │           └──► subtotal = Σ cost        (every order)                  │
//! │                                                                         │
//! │  bill ─────► grand = total_bill + total_bill × tip% + tax   (exact)    │
//! │                                                                         │
//! │  extras = grand − subtotal                                  (exact)    │
//! │  final[i] = round(totals[i] + totals[i] × extras / subtotal)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything up to `final[i]` is exact `Decimal` arithmetic; each friend's
//! amount is rounded half away from zero to the cent once, at the end.
//!
//! An order assigned to a friend that does not exist still counts in the
//! subtotal but in nobody's total. Its cost, and its share of the extras, is
//! not charged to anyone. This is long-standing behavior and is kept as is;
//! [`AllocationSummary::unassigned`] exposes the amount so callers can warn.
//!
//! A zero subtotal (typically: no orders yet) gives every friend `0.00`
//! instead of dividing by zero.
//!
//! ## Bounds
//! Amounts are i64 cents and the tip is at most
//! [`MAX_TIP_PERCENT`](crate::MAX_TIP_PERCENT), so the grand total and every
//! sum fit in a `Decimal` with room to spare. The per-friend products are
//! checked; a share that does not fit comes back as `Invalid`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::{round_cents, Money};
use crate::types::{AllocationResult, BillParameters, Order};
use crate::MAX_PARTICIPANTS;

/// Total amount to be allocated: bill plus tip plus tax, exact.
///
/// ```rust
/// use billsplit_core::{compute_grand_total, BillParameters, Decimal};
///
/// let bill = BillParameters::from_raw("100", "20", "8", 1);
/// assert_eq!(compute_grand_total(&bill), Decimal::from(128));
///
/// // half a cent of tip is kept
/// let bill = BillParameters::from_raw("0.01", "50", "0", 1);
/// assert_eq!(compute_grand_total(&bill), Decimal::new(15, 3));
/// ```
pub fn compute_grand_total(bill: &BillParameters) -> Decimal {
    let total_bill = bill.total_bill.to_decimal();
    total_bill + bill.tip.tip_on(total_bill) + bill.tax.to_decimal()
}

/// Sum of every order's cost, whoever it is assigned to.
pub fn compute_subtotal(orders: &[Order]) -> Decimal {
    orders.iter().map(|order| order.cost.to_decimal()).sum()
}

/// Sum of the costs of orders assigned to a friend outside
/// `0..participant_count`.
pub fn compute_unassigned(orders: &[Order], participant_count: usize) -> Decimal {
    orders
        .iter()
        .filter(|order| !order.is_assigned_within(participant_count))
        .map(|order| order.cost.to_decimal())
        .sum()
}

/// Computes what each friend owes.
///
/// Returns `Invalid` when there are no friends, more than
/// [`MAX_PARTICIPANTS`], or a share too large to represent.
///
/// ```rust
/// use billsplit_core::{allocate, BillParameters, Money, Order};
///
/// let orders = vec![Order::new("Soup", Money::from_cents(1000), 5)];
/// let bill = BillParameters::from_raw("10", "0", "0", 2);
///
/// // Friend index 5 does not exist: nobody is charged for the soup.
/// let result = allocate(&orders, &bill);
/// assert_eq!(result.formatted().unwrap(), vec!["0.00", "0.00"]);
/// ```
pub fn allocate(orders: &[Order], bill: &BillParameters) -> AllocationResult {
    let participant_count = bill.participant_count;
    if participant_count == 0 {
        return invalid(ValidationError::NoParticipants);
    }
    if participant_count > MAX_PARTICIPANTS {
        return invalid(ValidationError::TooManyParticipants);
    }

    let mut totals = vec![Decimal::ZERO; participant_count];
    for order in orders {
        if order.is_assigned_within(participant_count) {
            totals[order.person] += order.cost.to_decimal();
        }
    }

    let subtotal = compute_subtotal(orders);
    if subtotal.is_zero() {
        return AllocationResult::Valid {
            per_participant_total: vec![Money::zero(); participant_count],
        };
    }

    let extras = compute_grand_total(bill) - subtotal;
    let per_participant_total: Option<Vec<Money>> = totals
        .into_iter()
        .map(|total| {
            total
                .checked_mul(extras)?
                .checked_div(subtotal)?
                .checked_add(total)
                .and_then(Money::from_decimal)
        })
        .collect();

    match per_participant_total {
        Some(per_participant_total) => AllocationResult::Valid {
            per_participant_total,
        },
        None => invalid(ValidationError::AmountTooLarge),
    }
}

fn invalid(err: ValidationError) -> AllocationResult {
    AllocationResult::Invalid {
        reason: err.to_string(),
    }
}

// =============================================================================
// Allocation Summary
// =============================================================================

/// Everything a front end needs to render a split in one value.
///
/// The amounts are rounded to the cent for display and serialize as
/// two-decimal strings (`"128.00"`). Shares are computed from the exact
/// values, not from these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    /// Sum of all order costs.
    #[ts(type = "string")]
    pub subtotal: Decimal,

    /// Bill plus tip plus tax.
    #[ts(type = "string")]
    pub grand_total: Decimal,

    /// Grand total minus subtotal: the pool shared out proportionally.
    #[ts(type = "string")]
    pub extras: Decimal,

    /// Costs on orders whose friend does not exist.
    #[ts(type = "string")]
    pub unassigned: Decimal,

    /// Per-friend amounts, or why there are none.
    pub result: AllocationResult,
}

impl AllocationSummary {
    pub fn build(orders: &[Order], bill: &BillParameters) -> Self {
        let subtotal = compute_subtotal(orders);
        let grand_total = compute_grand_total(bill);

        AllocationSummary {
            subtotal: round_cents(subtotal),
            grand_total: round_cents(grand_total),
            extras: round_cents(grand_total - subtotal),
            unassigned: round_cents(compute_unassigned(orders, bill.participant_count)),
            result: allocate(orders, bill),
        }
    }

    /// Sum of what the friends were actually charged.
    pub fn allocated(&self) -> Decimal {
        self.result
            .totals()
            .map(|totals| totals.iter().map(Money::to_decimal).sum::<Decimal>())
            .unwrap_or_default()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
