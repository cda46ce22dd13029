//! # Error Types
//!
//! Domain-specific error types for billsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billsplit-core errors (this file)                                     │
//! │  ├── ValidationError  - Order entry / submission failures              │
//! │  └── CoreError        - Session edits that reference bad positions     │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the terminal sees (code + message)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stdout / stderr        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal. Every variant is a user-facing message that blocks
//! one forward action (adding an order, accepting the bill) until corrected.

use thiserror::Error;

use crate::{
    INVALID_ORDER_COSTS_MESSAGE, INVALID_ORDER_ENTRY_MESSAGE, MAX_PARTICIPANTS,
    NO_PARTICIPANTS_MESSAGE,
};

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The two order variants deliberately render different messages: one is
/// shown when adding a single order, the other when submitting the whole bill.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A new order was rejected. `field` names the offending input
    /// (`"item"` or `"cost"`) for logs; the message is the same for both.
    #[error("{}", INVALID_ORDER_ENTRY_MESSAGE)]
    InvalidOrderEntry { field: &'static str },

    /// One or more existing orders have a cost of zero or less.
    /// `positions` are zero-based indices into the order list.
    #[error("{}", INVALID_ORDER_COSTS_MESSAGE)]
    InvalidOrderCosts { positions: Vec<usize> },

    /// The bill is being split between zero friends.
    #[error("{}", NO_PARTICIPANTS_MESSAGE)]
    NoParticipants,

    /// More friends than [`MAX_PARTICIPANTS`].
    #[error("Number of friends must be at most {}", MAX_PARTICIPANTS)]
    TooManyParticipants,

    /// A share does not fit in i64 cents. Only reachable with orders built
    /// outside `add_order`, since parsed amounts are bounded.
    #[error("Amounts are too large to split")]
    AmountTooLarge,
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised when editing a session's order list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No order at the given 1-based position.
    #[error("No order at position {position} ({count} orders)")]
    OrderNotFound { position: usize, count: usize },

    /// Friend index is outside `0..participant_count`.
    #[error("Friend {} does not exist (splitting between {participant_count})", .person + 1)]
    ParticipantOutOfRange {
        person: usize,
        participant_count: usize,
    },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_distinct() {
        let entry = ValidationError::InvalidOrderEntry { field: "cost" };
        let costs = ValidationError::InvalidOrderCosts { positions: vec![0] };

        assert_eq!(entry.to_string(), "Please enter a valid item name and cost.");
        assert_eq!(costs.to_string(), "Please enter valid costs for all orders.");
        assert_ne!(entry.to_string(), costs.to_string());
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::OrderNotFound {
            position: 4,
            count: 2,
        };
        assert_eq!(err.to_string(), "No order at position 4 (2 orders)");

        let err = CoreError::ParticipantOutOfRange {
            person: 2,
            participant_count: 2,
        };
        assert_eq!(err.to_string(), "Friend 3 does not exist (splitting between 2)");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::NoParticipants.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Number of friends must be at least 1");
    }

    #[test]
    fn test_participant_limit_message() {
        assert_eq!(
            ValidationError::TooManyParticipants.to_string(),
            "Number of friends must be at most 1000"
        );
    }
}
