//! # Session State
//!
//! The editable bill: the order list plus the raw text of the bill fields.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  User Action              Command                 Session Change        │
//! │  ───────────              ───────                 ──────────────        │
//! │                                                                         │
//! │  add 2 5.50 Soda ───────► add_order() ──────────► orders.push(order)   │
//! │                                                                         │
//! │  assign 1 3 ────────────► reassign_order() ─────► orders[0].person = 2 │
//! │                                                                         │
//! │  cost 1 4.25 ───────────► set_order_cost() ─────► orders[0].cost = ... │
//! │                                                                         │
//! │  remove 1 ──────────────► remove_order() ───────► orders.remove(0)     │
//! │                                                                         │
//! │  tip 18 ────────────────► set_tip() ────────────► tip_percent = "18"   │
//! │                                                                         │
//! │  Every change ──────────► snapshot() ───────────► billsplit-core       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Positions are 1-based, as displayed. Friend indices are zero-based.

use billsplit_core::coerce;
use billsplit_core::{
    add_order, BillParameters, CoreError, CoreResult, Order, ValidationError, MAX_PARTICIPANTS,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One bill being split.
///
/// ## Invariants
/// - `1 <= participant_count <= MAX_PARTICIPANTS`
/// - New orders and reassignments always name an existing friend.
///   Orders can still end up out of range when the friend count shrinks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Orders in entry order.
    pub orders: Vec<Order>,

    /// Raw "total bill" text, coerced on every snapshot.
    pub total_bill: String,

    /// Raw tip percentage text.
    pub tip_percent: String,

    /// Raw flat tax text.
    pub tax: String,

    /// Number of friends splitting the bill.
    pub participant_count: usize,

    /// When the session was started or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates an empty session.
    ///
    /// `participant_count` is clamped to `1..=MAX_PARTICIPANTS`.
    pub fn new(participant_count: usize, tip_percent: impl Into<String>) -> Self {
        Session {
            orders: Vec::new(),
            total_bill: String::new(),
            tip_percent: tip_percent.into(),
            tax: String::new(),
            participant_count: participant_count.clamp(1, MAX_PARTICIPANTS),
            created_at: Utc::now(),
        }
    }

    /// Validates and appends a new order.
    pub fn add_order(&mut self, item: &str, cost: &str, person: usize) -> CoreResult<&Order> {
        self.check_person(person)?;
        let order = add_order(item, cost, person)?;
        self.orders.push(order);
        Ok(&self.orders[self.orders.len() - 1])
    }

    /// Removes the order at a 1-based position and returns it.
    pub fn remove_order(&mut self, position: usize) -> CoreResult<Order> {
        let index = self.index_of(position)?;
        Ok(self.orders.remove(index))
    }

    /// Assigns the order at a 1-based position to another friend.
    pub fn reassign_order(&mut self, position: usize, person: usize) -> CoreResult<&Order> {
        let index = self.index_of(position)?;
        self.check_person(person)?;
        let order = &mut self.orders[index];
        order.person = person;
        Ok(order)
    }

    /// Edits the cost of an existing order.
    ///
    /// Unlike adding, this is lenient: unusable text becomes zero, which
    /// `validate_orders` then reports when the bill is calculated.
    pub fn set_order_cost(&mut self, position: usize, raw_cost: &str) -> CoreResult<&Order> {
        let index = self.index_of(position)?;
        let order = &mut self.orders[index];
        order.cost = coerce::amount_or_zero(raw_cost);
        Ok(order)
    }

    pub fn set_total_bill(&mut self, raw: impl Into<String>) {
        self.total_bill = raw.into();
    }

    pub fn set_tip_percent(&mut self, raw: impl Into<String>) {
        self.tip_percent = raw.into();
    }

    pub fn set_tax(&mut self, raw: impl Into<String>) {
        self.tax = raw.into();
    }

    /// Changes how many friends split the bill.
    ///
    /// Existing orders are kept even if their friend no longer exists.
    pub fn set_participant_count(&mut self, count: usize) -> CoreResult<()> {
        if count == 0 {
            return Err(ValidationError::NoParticipants.into());
        }
        if count > MAX_PARTICIPANTS {
            return Err(ValidationError::TooManyParticipants.into());
        }
        self.participant_count = count;
        Ok(())
    }

    /// Drops every order and restarts the session clock.
    pub fn clear(&mut self) {
        self.orders.clear();
        self.created_at = Utc::now();
    }

    /// Immutable inputs for one allocation.
    pub fn snapshot(&self) -> (Vec<Order>, BillParameters) {
        let bill = BillParameters::from_raw(
            &self.total_bill,
            &self.tip_percent,
            &self.tax,
            self.participant_count,
        );
        (self.orders.clone(), bill)
    }

    /// Number of orders whose friend no longer exists.
    pub fn unassigned_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|order| !order.is_assigned_within(self.participant_count))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn index_of(&self, position: usize) -> CoreResult<usize> {
        if position == 0 || position > self.orders.len() {
            return Err(CoreError::OrderNotFound {
                position,
                count: self.orders.len(),
            });
        }
        Ok(position - 1)
    }

    fn check_person(&self, person: usize) -> CoreResult<()> {
        if person >= self.participant_count {
            return Err(CoreError::ParticipantOutOfRange {
                person,
                participant_count: self.participant_count,
            });
        }
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new(1, "0")
    }
}
