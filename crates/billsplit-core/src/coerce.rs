//! # Input Coercion
//!
//! Turns raw user-entered text into amounts.
//!
//! Two flavours exist:
//! - **strict** ([`parse_amount`], [`parse_tip`]): `None` on anything that is
//!   not a number or is out of bounds. Used when adding an order, where bad
//!   input must be rejected.
//! - **lenient** ([`amount_or_zero`], [`tip_or_zero`]): empty, non-numeric,
//!   negative or out-of-bounds input becomes zero. Used for the bill, tip and
//!   tax fields and for edits to an existing order's cost, so running totals
//!   never fail.
//!
//! Parsing goes through `rust_decimal`, so `"0.1"` is exactly ten cents and
//! there is no NaN or infinity to guard against afterwards.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::money::Money;
use crate::types::TipRate;
use crate::MAX_AMOUNT;

/// Parses a decimal amount, rounding half away from zero to the cent.
///
/// Accepts surrounding whitespace and an optional leading `$`. Amounts
/// larger in magnitude than [`MAX_AMOUNT`] are rejected.
///
/// ```rust
/// use billsplit_core::coerce::parse_amount;
/// use billsplit_core::Money;
///
/// assert_eq!(parse_amount(" 5.50 "), Some(Money::from_cents(550)));
/// assert_eq!(parse_amount("$12"), Some(Money::from_cents(1200)));
/// assert_eq!(parse_amount("abc"), None);
/// assert_eq!(parse_amount(""), None);
/// assert_eq!(parse_amount("90000000000000000"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<Money> {
    let max = MAX_AMOUNT.cents();
    parse_decimal(raw)
        .and_then(Money::from_decimal)
        .filter(|amount| (-max..=max).contains(&amount.cents()))
}

/// Lenient amount: zero unless `raw` is a non-negative number no larger
/// than [`MAX_AMOUNT`].
pub fn amount_or_zero(raw: &str) -> Money {
    parse_amount(raw)
        .filter(|amount| !amount.is_negative())
        .unwrap_or_default()
}

/// Parses a tip percentage exactly as typed: `"18.5"` is 18.5%.
///
/// Negative tips and tips above [`MAX_TIP_PERCENT`](crate::MAX_TIP_PERCENT)
/// are rejected.
///
/// ```rust
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
/// use billsplit_core::coerce::parse_tip;
///
/// assert_eq!(parse_tip("12.345").unwrap().percent(), Decimal::from_str("12.345").unwrap());
/// assert_eq!(parse_tip("-5"), None);
/// assert_eq!(parse_tip("5000"), None);
/// ```
pub fn parse_tip(raw: &str) -> Option<TipRate> {
    parse_decimal(raw).and_then(TipRate::from_percent)
}

/// Lenient tip percentage: zero unless [`parse_tip`] accepts `raw`.
pub fn tip_or_zero(raw: &str) -> TipRate {
    parse_tip(raw).unwrap_or_default()
}

/// Parses a zero-based friend index from its 1-based display label.
///
/// `"1"` is the first friend (index 0). Zero, negative and non-numeric
/// input yield `None`.
pub fn friend_index(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(|label| label.checked_sub(1))
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_strict() {
        assert_eq!(parse_amount("5"), Some(Money::from_cents(500)));
        assert_eq!(parse_amount("-1"), Some(Money::from_cents(-100)));
        assert_eq!(parse_amount("0.004"), Some(Money::zero()));
        assert_eq!(parse_amount("5abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("   "), None);
    }

    #[test]
    fn test_parse_amount_bound() {
        assert_eq!(parse_amount("100000000000"), Some(MAX_AMOUNT));
        assert_eq!(parse_amount("-100000000000"), Some(Money::from_cents(-MAX_AMOUNT.cents())));
        assert_eq!(parse_amount("100000000000.01"), None);
        assert_eq!(parse_amount("90000000000000000"), None);
        assert_eq!(parse_amount("99999999999999999999999999"), None);
    }

    #[test]
    fn test_amount_or_zero() {
        assert_eq!(amount_or_zero("100"), Money::from_cents(10000));
        assert_eq!(amount_or_zero(""), Money::zero());
        assert_eq!(amount_or_zero("abc"), Money::zero());
        assert_eq!(amount_or_zero("-3"), Money::zero());
        assert_eq!(amount_or_zero("90000000000000000"), Money::zero());
    }

    #[test]
    fn test_tip_or_zero() {
        assert_eq!(tip_or_zero("20"), TipRate::from_bps(2000));
        assert_eq!(tip_or_zero("12.345").percent(), Decimal::new(12345, 3));
        assert_eq!(tip_or_zero("0"), TipRate::zero());
        assert_eq!(tip_or_zero("lots"), TipRate::zero());
        assert_eq!(tip_or_zero("-5"), TipRate::zero());
        assert_eq!(tip_or_zero("1000.5"), TipRate::zero());
    }

    #[test]
    fn test_friend_index() {
        assert_eq!(friend_index("1"), Some(0));
        assert_eq!(friend_index(" 3 "), Some(2));
        assert_eq!(friend_index("0"), None);
        assert_eq!(friend_index("-1"), None);
        assert_eq!(friend_index("two"), None);
    }
}
