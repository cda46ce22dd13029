//! # Rendering
//!
//! Turns command responses into terminal output, either as aligned text or
//! as pretty-printed JSON (`--json`).

use std::io::Write;

use billsplit_core::{AllocationResult, Decimal};
use serde::Serialize;

use crate::commands::SplitResponse;
use crate::error::CliError;
use crate::state::ConfigState;

/// Writes responses in the format chosen on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    config: &'a ConfigState,
    json: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a ConfigState, json: bool) -> Self {
        Renderer { config, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Renders orders, totals and per-friend amounts.
    pub fn split<W: Write>(&self, out: &mut W, response: &SplitResponse) -> Result<(), CliError> {
        if self.json {
            return self.json_line(out, response);
        }

        let money = |amount: Decimal| self.config.format_currency(amount);
        let summary = &response.summary;

        writeln!(out, "Orders:")?;
        if response.orders.is_empty() {
            writeln!(out, "  No orders added yet.")?;
        }
        for (index, order) in response.orders.iter().enumerate() {
            let assignee = if order.is_assigned_within(response.participant_count) {
                friend_label(order.person)
            } else {
                format!("{} (not splitting)", friend_label(order.person))
            };
            writeln!(
                out,
                "  {:>2}. {:<20} {:>10}  {}",
                index + 1,
                order.item,
                money(order.cost.to_decimal()),
                assignee
            )?;
        }

        writeln!(out, "Subtotal:     {:>10}", money(summary.subtotal))?;
        writeln!(
            out,
            "Grand total:  {:>10}  (tip and tax {})",
            money(summary.grand_total),
            money(summary.extras)
        )?;

        match &summary.result {
            AllocationResult::Valid {
                per_participant_total,
            } => {
                for (person, total) in per_participant_total.iter().enumerate() {
                    writeln!(out, "{:<13} {:>10}", format!("{}:", friend_label(person)), money(total.to_decimal()))?;
                }
            }
            AllocationResult::Invalid { reason } => writeln!(out, "{}", reason)?,
        }

        if self.config.warn_unassigned && !summary.unassigned.is_zero() {
            writeln!(
                out,
                "Warning: {} of orders belong to friends that are not splitting and is not charged to anyone.",
                money(summary.unassigned)
            )?;
        }

        Ok(())
    }

    /// Renders an error without aborting.
    pub fn error<W: Write>(&self, out: &mut W, err: &CliError) -> Result<(), CliError> {
        if self.json {
            return self.json_line(out, err);
        }
        writeln!(out, "Error: {}", err.message)?;
        Ok(())
    }

    pub fn config<W: Write>(&self, out: &mut W, config: &ConfigState) -> Result<(), CliError> {
        if self.json {
            return self.json_line(out, config);
        }
        writeln!(out, "currency_symbol     = {}", config.currency_symbol)?;
        writeln!(out, "default_friends     = {}", config.default_friends)?;
        writeln!(out, "default_tip_percent = {}", config.default_tip_percent)?;
        writeln!(out, "warn_unassigned     = {}", config.warn_unassigned)?;
        Ok(())
    }

    fn json_line<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> Result<(), CliError> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Display name of a zero-based friend index.
pub fn friend_label(person: usize) -> String {
    format!("Friend {}", person + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Session;

    fn render(session: &Session, json: bool) -> String {
        let config = ConfigState::default();
        let renderer = Renderer::new(&config, json);
        let mut out = Vec::new();
        renderer.split(&mut out, &SplitResponse::from(session)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_split() {
        let mut session = Session::new(2, "10");
        session.set_total_bill("100");
        session.add_order("Pasta", "30", 0).unwrap();
        session.add_order("Steak", "70", 1).unwrap();

        let text = render(&session, false);
        assert!(text.contains("Pasta"));
        assert!(text.contains("Friend 1:"));
        assert!(text.contains("$33.00"));
        assert!(text.contains("$77.00"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_text_empty_session() {
        let text = render(&Session::new(1, "0"), false);
        assert!(text.contains("No orders added yet."));
        assert!(text.contains("$0.00"));
    }

    #[test]
    fn test_unassigned_warning() {
        let mut session = Session::new(2, "0");
        session.add_order("Soup", "10", 1).unwrap();
        session.set_participant_count(1).unwrap();

        let text = render(&session, false);
        assert!(text.contains("Friend 2 (not splitting)"));
        assert!(text.contains("Warning: $10.00"));
    }

    #[test]
    fn test_json_split() {
        let mut session = Session::new(1, "0");
        session.add_order("Soda", "5.50", 0).unwrap();

        let json: serde_json::Value = serde_json::from_str(&render(&session, true)).unwrap();
        assert_eq!(json["orders"][0]["item"], "Soda");
        assert_eq!(json["summary"]["result"]["status"], "valid");
        assert_eq!(json["summary"]["grandTotal"], "5.50");
        assert_eq!(json["summary"]["result"]["perParticipantTotal"][0], 550);
        assert_eq!(json["formattedTotals"][0], "5.50");
    }

    #[test]
    fn test_json_invalid_split_has_no_formatted_totals() {
        let mut session = Session::new(1, "0");
        session.add_order("Soda", "5.50", 0).unwrap();
        session.participant_count = 0;

        let json: serde_json::Value = serde_json::from_str(&render(&session, true)).unwrap();
        assert_eq!(json["summary"]["result"]["status"], "invalid");
        assert!(json.get("formattedTotals").is_none());
    }

    #[test]
    fn test_text_split_rounds_only_displayed_totals() {
        let mut session = Session::new(2, "50");
        session.set_total_bill("0.01");
        session.set_tax("9.99");
        session.add_order("Steak", "9", 0).unwrap();
        session.add_order("Soda", "1", 1).unwrap();

        let text = render(&session, false);
        assert!(text.contains("$10.01"));
        assert!(text.contains("$9.00"));
        assert!(text.contains("$1.00"));
    }

    #[test]
    fn test_error_text() {
        let config = ConfigState::default();
        let mut out = Vec::new();
        Renderer::new(&config, false)
            .error(&mut out, &CliError::validation("Please enter valid costs for all orders."))
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Please enter valid costs for all orders.\n"
        );
    }
}
