//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    0 / 0     = NaN                  ❌ leaks into every share           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Exact Decimals                           │
//! │    Entered amounts are stored as i64 cents. Totals, tip and shares     │
//! │    are computed exactly in `rust_decimal::Decimal` and rounded half    │
//! │    away from zero exactly once, on each friend's final amount.         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use billsplit_core::money::Money;
//!
//! let pasta = Money::from_cents(1250); // $12.50
//! assert_eq!(pasta.to_string(), "$12.50");
//! assert_eq!(pasta.to_plain_string(), "12.50");
//! assert_eq!(pasta.to_decimal().to_string(), "12.50");
//! ```

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: an edited cost or a hand-built order may be negative
/// - **No arithmetic operators**: sums are taken in `Decimal`, which cannot
///   overflow for any realistic number of orders; `Money` only stores and
///   displays single amounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// Parsed input is bounded by [`MAX_AMOUNT`](crate::MAX_AMOUNT).
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "12.50" ──► coerce ──► Order.cost ──┬──► totals[person]                │
/// │                                      └──► subtotal                      │
/// │                                                                         │
/// │  total_bill + tip + tax ──► grand total (Decimal) ──► final shares     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use billsplit_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounding half away from
    /// zero to the cent.
    ///
    /// Returns `None` if the amount does not fit in i64 cents.
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use rust_decimal::Decimal;
    /// use billsplit_core::money::Money;
    ///
    /// let amount = Decimal::from_str("5.555").unwrap();
    /// assert_eq!(Money::from_decimal(amount), Some(Money::from_cents(556)));
    /// ```
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        let cents = amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)?;
        cents.to_i64().map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ```rust
    /// use billsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats as a bare two-decimal amount, e.g. `"33.00"` or `"-5.50"`.
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// The exact decimal value, e.g. `12.50` for 1250 cents.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }
}

/// Rounds half away from zero to the cent, keeping two decimal places
/// (`128` becomes `128.00`).
///
/// ```rust
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
/// use billsplit_core::money::round_cents;
///
/// let exact = Decimal::from_str("9.0045").unwrap();
/// assert_eq!(round_cents(exact).to_string(), "9.00");
/// assert_eq!(round_cents(Decimal::from(128)).to_string(), "128.00");
/// ```
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a dollar sign, e.g. `$10.99` or `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
