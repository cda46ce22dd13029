//! # Order Commands
//!
//! Adding and editing the order list.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  add_order   ┌──────────┐  calculate   ┌──────────┐       │
//! │  │  Empty   │─────────────►│ Orders   │─────────────►│  Final   │       │
//! │  │ session  │              │ entered  │              │  split   │       │
//! │  └──────────┘              └──────────┘              └──────────┘       │
//! │                                 │                                       │
//! │                  reassign_order / set_order_cost                        │
//! │                  remove_order                                           │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                  clear_orders ─────────► (back to empty)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Friends are addressed by their 1-based label ("2" is Friend 2), orders
//! by their 1-based position in the list.

use billsplit_core::coerce;
use tracing::debug;

use crate::commands::SplitResponse;
use crate::error::CliError;
use crate::state::Session;

/// Adds an order for a friend.
///
/// ## Arguments
/// * `item` - What was ordered (must not be blank)
/// * `cost` - Cost as typed (must be a positive number)
/// * `friend` - 1-based friend label
pub fn add_order(
    session: &mut Session,
    item: &str,
    cost: &str,
    friend: &str,
) -> Result<SplitResponse, CliError> {
    debug!(item = %item, cost = %cost, friend = %friend, "add_order command");

    let person = parse_friend(session, friend)?;
    session.add_order(item, cost, person)?;

    Ok(SplitResponse::from(&*session))
}

/// Moves an order to another friend.
pub fn reassign_order(
    session: &mut Session,
    position: &str,
    friend: &str,
) -> Result<SplitResponse, CliError> {
    debug!(position = %position, friend = %friend, "reassign_order command");

    let position = parse_position(position)?;
    let person = parse_friend(session, friend)?;
    session.reassign_order(position, person)?;

    Ok(SplitResponse::from(&*session))
}

/// Changes an order's cost. Unusable text sets the cost to zero, which
/// blocks [`calculate`](crate::commands::bill::calculate) until fixed.
pub fn set_order_cost(
    session: &mut Session,
    position: &str,
    cost: &str,
) -> Result<SplitResponse, CliError> {
    debug!(position = %position, cost = %cost, "set_order_cost command");

    let position = parse_position(position)?;
    session.set_order_cost(position, cost)?;

    Ok(SplitResponse::from(&*session))
}

/// Removes an order.
pub fn remove_order(session: &mut Session, position: &str) -> Result<SplitResponse, CliError> {
    debug!(position = %position, "remove_order command");

    let position = parse_position(position)?;
    let removed = session.remove_order(position)?;
    debug!(item = %removed.item, "order removed");

    Ok(SplitResponse::from(&*session))
}

/// Removes every order. Bill, tip, tax and friend count are kept.
pub fn clear_orders(session: &mut Session) -> SplitResponse {
    debug!("clear_orders command");

    session.clear();
    SplitResponse::from(&*session)
}

/// Parses one `ITEM:COST:FRIEND` spec, as given to `billsplit split --order`.
///
/// The item may itself contain colons; cost and friend are taken from the
/// right.
pub fn parse_order_spec(spec: &str) -> Result<(&str, &str, &str), CliError> {
    let mut parts = spec.rsplitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(friend), Some(cost), Some(item)) => Ok((item, cost, friend)),
        _ => Err(CliError::invalid_argument(format!(
            "'{}' is not ITEM:COST:FRIEND",
            spec
        ))),
    }
}

fn parse_friend(session: &Session, raw: &str) -> Result<usize, CliError> {
    coerce::friend_index(raw).ok_or_else(|| {
        CliError::invalid_argument(format!(
            "Friend must be a number from 1 to {}",
            session.participant_count
        ))
    })
}

fn parse_position(raw: &str) -> Result<usize, CliError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| CliError::invalid_argument(format!("'{}' is not an order number", raw.trim())))
}
