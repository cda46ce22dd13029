//! # Domain Types
//!
//! Core domain types used throughout billsplit.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌──────────────────┐ │
//! │  │     Order       │   │   BillParameters     │   │ AllocationResult │ │
//! │  │  ─────────────  │   │  ──────────────────  │   │ ──────────────── │ │
//! │  │  item           │   │  total_bill (Money)  │   │ Valid {          │ │
//! │  │  cost (Money)   │   │  tip (TipRate)       │   │   per_participant│ │
//! │  │  person (index) │   │  tax (Money)         │   │   _total }       │ │
//! │  └─────────────────┘   │  participant_count   │   │ Invalid{reason}  │ │
//! │                        └──────────────────────┘   └──────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TipRate      │   exact percentage (Decimal), 18.5 = 18.5%        │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are plain values. The engine receives them as an immutable
//! snapshot per call and never keeps them around.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coerce;
use crate::money::Money;
use crate::MAX_TIP_PERCENT;

// =============================================================================
// Tip Rate
// =============================================================================

/// Tip percentage, kept exactly as entered: `"12.345"` is 12.345%.
///
/// ## Invariants
/// - `0 <= percent <= MAX_TIP_PERCENT`, enforced by every constructor and
///   by deserialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct TipRate(#[ts(type = "string")] Decimal);

impl TipRate {
    /// Creates a tip rate from a percentage, e.g. `18.5` for 18.5%.
    ///
    /// Returns `None` for negative percentages and for anything above
    /// [`MAX_TIP_PERCENT`].
    pub fn from_percent(percent: Decimal) -> Option<Self> {
        if percent.is_sign_negative() && !percent.is_zero() {
            return None;
        }
        if percent > Decimal::from(MAX_TIP_PERCENT) {
            return None;
        }
        Some(TipRate(percent.normalize()))
    }

    /// Creates a tip rate from basis points (1850 = 18.50%), saturating at
    /// [`MAX_TIP_PERCENT`].
    pub fn from_bps(bps: u32) -> Self {
        let bps = bps.min(MAX_TIP_PERCENT * 100);
        TipRate(Decimal::new(i64::from(bps), 2).normalize())
    }

    /// The percentage, e.g. `18.5`.
    #[inline]
    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// Tip on `amount`, exact (not rounded to the cent).
    pub fn tip_on(&self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }

    /// Zero tip.
    #[inline]
    pub const fn zero() -> Self {
        TipRate(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TipRate {
    fn default() -> Self {
        TipRate::zero()
    }
}

impl TryFrom<Decimal> for TipRate {
    type Error = String;

    fn try_from(percent: Decimal) -> Result<Self, Self::Error> {
        TipRate::from_percent(percent)
            .ok_or_else(|| format!("tip must be between 0 and {}%", MAX_TIP_PERCENT))
    }
}

impl From<TipRate> for Decimal {
    fn from(rate: TipRate) -> Self {
        rate.0
    }
}

// =============================================================================
// Order
// =============================================================================

/// A single line item assigned to one friend.
///
/// `person` is a zero-based friend index. It is not checked against the
/// number of friends here: an order can outlive a shrinking friend count,
/// and the allocation handles that case explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// What was ordered, e.g. "Soda".
    pub item: String,

    /// Cost of the item.
    pub cost: Money,

    /// Zero-based index of the friend paying for it.
    pub person: usize,
}

impl Order {
    pub fn new(item: impl Into<String>, cost: Money, person: usize) -> Self {
        Order {
            item: item.into(),
            cost,
            person,
        }
    }

    /// Whether this order belongs to one of `participant_count` friends.
    #[inline]
    pub fn is_assigned_within(&self, participant_count: usize) -> bool {
        self.person < participant_count
    }
}

// =============================================================================
// Bill Parameters
// =============================================================================

/// The bill-level inputs of one allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillParameters {
    /// Total bill before tip and tax.
    pub total_bill: Money,

    /// Tip as a percentage of `total_bill`.
    pub tip: TipRate,

    /// Flat tax amount.
    pub tax: Money,

    /// Number of friends splitting the bill.
    pub participant_count: usize,
}

impl BillParameters {
    pub fn new(total_bill: Money, tip: TipRate, tax: Money, participant_count: usize) -> Self {
        BillParameters {
            total_bill,
            tip,
            tax,
            participant_count,
        }
    }

    /// Builds parameters from the raw text of the bill, tip and tax fields.
    ///
    /// Empty, non-numeric or negative text counts as zero, and so does an
    /// amount above [`MAX_AMOUNT`](crate::MAX_AMOUNT) or a tip above
    /// [`MAX_TIP_PERCENT`].
    ///
    /// ```rust
    /// use billsplit_core::BillParameters;
    ///
    /// let bill = BillParameters::from_raw("100", "", "abc", 3);
    /// assert_eq!(bill.total_bill.cents(), 10000);
    /// assert!(bill.tip.is_zero());
    /// assert!(bill.tax.is_zero());
    /// ```
    pub fn from_raw(total_bill: &str, tip_percent: &str, tax: &str, participant_count: usize) -> Self {
        BillParameters {
            total_bill: coerce::amount_or_zero(total_bill),
            tip: coerce::tip_or_zero(tip_percent),
            tax: coerce::amount_or_zero(tax),
            participant_count,
        }
    }
}

// =============================================================================
// Allocation Result
// =============================================================================

/// Outcome of splitting the bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AllocationResult {
    /// One amount per friend, in friend order.
    #[serde(rename_all = "camelCase")]
    Valid { per_participant_total: Vec<Money> },

    /// The bill could not be split; `reason` is shown to the user as-is.
    Invalid { reason: String },
}

impl AllocationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, AllocationResult::Valid { .. })
    }

    /// The per-friend totals, if valid.
    pub fn totals(&self) -> Option<&[Money]> {
        match self {
            AllocationResult::Valid {
                per_participant_total,
            } => Some(per_participant_total),
            AllocationResult::Invalid { .. } => None,
        }
    }

    /// The per-friend totals as two-decimal strings, e.g. `["33.00", "77.00"]`.
    pub fn formatted(&self) -> Option<Vec<String>> {
        self.totals()
            .map(|totals| totals.iter().map(Money::to_plain_string).collect())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::str::FromStr;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn test_tip_rate_constructors() {
        assert_eq!(TipRate::from_bps(1850).percent(), dec("18.5"));
        assert_eq!(TipRate::from_percent(dec("18.50")), Some(TipRate::from_bps(1850)));
        assert_eq!(TipRate::from_percent(dec("12.345")).unwrap().percent(), dec("12.345"));
        assert_eq!(TipRate::default(), TipRate::zero());
    }

    #[test]
    fn test_tip_rate_bounds() {
        assert_eq!(TipRate::from_percent(dec("-1")), None);
        assert_eq!(TipRate::from_percent(dec("1000.01")), None);
        assert!(TipRate::from_percent(dec("1000")).is_some());
        assert_eq!(TipRate::from_bps(u32::MAX).percent(), Decimal::from(MAX_TIP_PERCENT));
    }

    #[test]
    fn test_tip_is_exact() {
        // 50% of 0.01 is half a cent, not rounded here
        assert_eq!(TipRate::from_bps(5000).tip_on(dec("0.01")), dec("0.005"));
        assert_eq!(TipRate::from_percent(dec("12.345")).unwrap().tip_on(dec("10")), dec("1.2345"));
    }

    #[test]
    fn test_tip_rate_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<TipRate>("\"18.5\"").is_ok());
        assert!(serde_json::from_str::<TipRate>("\"-5\"").is_err());
        assert!(serde_json::from_str::<TipRate>("\"5000\"").is_err());
    }

    #[test]
    fn test_order_assignment_range() {
        let order = Order::new("Soda", Money::from_cents(550), 1);
        assert!(order.is_assigned_within(2));
        assert!(!order.is_assigned_within(1));
    }

    #[test]
    fn test_bill_from_raw() {
        let bill = BillParameters::from_raw("100", "20", "8", 2);
        assert_eq!(bill.total_bill, Money::from_cents(10000));
        assert_eq!(bill.tip, TipRate::from_bps(2000));
        assert_eq!(bill.tax, Money::from_cents(800));
        assert_eq!(bill.participant_count, 2);
    }

    #[test]
    fn test_allocation_result_formatted() {
        let result = AllocationResult::Valid {
            per_participant_total: vec![Money::from_cents(3300), Money::from_cents(7700)],
        };
        assert!(result.is_valid());
        assert_eq!(
            result.formatted(),
            Some(vec!["33.00".to_string(), "77.00".to_string()])
        );

        let invalid = AllocationResult::Invalid {
            reason: "nope".to_string(),
        };
        assert!(invalid.totals().is_none());
    }

    #[test]
    fn test_allocation_result_json_shape() {
        let result = AllocationResult::Valid {
            per_participant_total: vec![Money::from_cents(150)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "valid");
        assert_eq!(json["perParticipantTotal"][0], 150);
    }
}
