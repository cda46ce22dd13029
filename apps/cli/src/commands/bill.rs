//! # Bill Commands
//!
//! Bill-level inputs, the running split, and the final calculation.

use billsplit_core::{validate_orders, AllocationSummary, Order};
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::state::Session;

/// A session's orders and the split they currently produce.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResponse {
    pub orders: Vec<Order>,
    pub participant_count: usize,
    pub summary: AllocationSummary,

    /// Per-friend totals as two-decimal strings; absent when the split is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_totals: Option<Vec<String>>,
}

impl From<&Session> for SplitResponse {
    fn from(session: &Session) -> Self {
        let (orders, bill) = session.snapshot();
        let summary = AllocationSummary::build(&orders, &bill);
        SplitResponse {
            orders,
            participant_count: bill.participant_count,
            formatted_totals: summary.result.formatted(),
            summary,
        }
    }
}

/// Current orders and running split. Never fails.
pub fn get_split(session: &Session) -> SplitResponse {
    debug!(orders = session.orders.len(), "get_split command");
    SplitResponse::from(session)
}

/// Sets the total bill before tip and tax. Unusable text counts as zero.
pub fn set_total_bill(session: &mut Session, raw: &str) -> SplitResponse {
    debug!(raw = %raw, "set_total_bill command");
    session.set_total_bill(raw.trim());
    SplitResponse::from(&*session)
}

/// Sets the tip percentage. Unusable text counts as zero.
pub fn set_tip(session: &mut Session, raw: &str) -> SplitResponse {
    debug!(raw = %raw, "set_tip command");
    session.set_tip_percent(raw.trim());
    SplitResponse::from(&*session)
}

/// Sets the flat tax amount. Unusable text counts as zero.
pub fn set_tax(session: &mut Session, raw: &str) -> SplitResponse {
    debug!(raw = %raw, "set_tax command");
    session.set_tax(raw.trim());
    SplitResponse::from(&*session)
}

/// Sets the number of friends.
///
/// Unlike the amount fields this is strict: it decides how many totals
/// exist, so `"abc"` or `"0"` is rejected rather than guessed.
pub fn set_friends(session: &mut Session, raw: &str) -> Result<SplitResponse, CliError> {
    debug!(raw = %raw, "set_friends command");

    let count = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| CliError::invalid_argument(format!("'{}' is not a number of friends", raw.trim())))?;
    session.set_participant_count(count)?;

    Ok(SplitResponse::from(&*session))
}

/// Final calculation: checks every order's cost, then returns the split.
pub fn calculate(session: &Session) -> Result<SplitResponse, CliError> {
    debug!(orders = session.orders.len(), "calculate command");

    validate_orders(&session.orders)?;
    Ok(SplitResponse::from(session))
}
