//! # Interactive Session
//!
//! A line-oriented front end over stdin. Each line is one edit; after every
//! edit the running split is printed again.
//!
//! ```text
//! > friends 2
//! > bill 100
//! > tip 10
//! > add 1 30 Pasta
//! > add 2 70 Steak
//! > calculate
//! ```
//!
//! Errors are printed and the session carries on. Only I/O failures end it.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::commands::{bill, order, SplitResponse};
use crate::error::CliError;
use crate::render::Renderer;
use crate::state::Session;

pub const HELP: &str = "\
Commands:
  bill <amount>              total bill before tip and tax
  tip <percent>              tip percentage
  tax <amount>               flat tax amount
  friends <count>            number of friends splitting
  add <friend> <cost> <item> add an order for a friend (friends are 1..N)
  assign <order> <friend>    move an order to another friend
  cost <order> <amount>      change an order's cost
  remove <order>             remove an order
  clear                      remove all orders
  list                       show orders and running totals
  calculate                  check every order and show the final split
  help                       show this help
  quit                       leave";

/// What one input line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Bill(&'a str),
    Tip(&'a str),
    Tax(&'a str),
    Friends(&'a str),
    Add {
        friend: &'a str,
        cost: &'a str,
        item: &'a str,
    },
    Assign {
        position: &'a str,
        friend: &'a str,
    },
    Cost {
        position: &'a str,
        cost: &'a str,
    },
    Remove(&'a str),
    Clear,
    List,
    Calculate,
    Help,
    Quit,
    Blank,
}

impl<'a> Line<'a> {
    pub fn parse(line: &'a str) -> Result<Self, CliError> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let parsed = match keyword.to_ascii_lowercase().as_str() {
            "" => Line::Blank,
            "bill" => Line::Bill(rest),
            "tip" => Line::Tip(rest),
            "tax" => Line::Tax(rest),
            "friends" => Line::Friends(rest),
            "add" => {
                let (friend, rest) = next_word(rest).ok_or_else(|| usage("add <friend> <cost> <item>"))?;
                let (cost, item) = next_word(rest).ok_or_else(|| usage("add <friend> <cost> <item>"))?;
                Line::Add { friend, cost, item }
            }
            "assign" => {
                let (position, friend) = next_word(rest).ok_or_else(|| usage("assign <order> <friend>"))?;
                Line::Assign { position, friend }
            }
            "cost" => {
                let (position, cost) = next_word(rest).ok_or_else(|| usage("cost <order> <amount>"))?;
                Line::Cost { position, cost }
            }
            "remove" => Line::Remove(rest),
            "clear" => Line::Clear,
            "list" | "totals" => Line::List,
            "calculate" => Line::Calculate,
            "help" | "?" => Line::Help,
            "quit" | "exit" => Line::Quit,
            other => {
                return Err(CliError::invalid_argument(format!(
                    "Unknown command '{}'. Type 'help' for a list.",
                    other
                )))
            }
        };
        Ok(parsed)
    }
}

/// Runs the session until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    renderer: Renderer<'_>,
    input: R,
    out: &mut W,
) -> Result<(), CliError> {
    if !renderer.is_json() {
        writeln!(out, "Splitting between {} friend(s). Type 'help' for commands.", session.participant_count)?;
    }

    for line in input.lines() {
        let line = line?;
        debug!(line = %line, "interactive input");

        let outcome = match Line::parse(&line) {
            Ok(Line::Quit) => break,
            Ok(Line::Blank) => continue,
            Ok(Line::Help) => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Ok(parsed) => apply(session, parsed),
            Err(err) => Err(err),
        };

        match outcome {
            Ok(response) => renderer.split(out, &response)?,
            Err(err) => renderer.error(out, &err)?,
        }
    }

    out.flush()?;
    Ok(())
}

fn apply(session: &mut Session, line: Line<'_>) -> Result<SplitResponse, CliError> {
    match line {
        Line::Bill(raw) => Ok(bill::set_total_bill(session, raw)),
        Line::Tip(raw) => Ok(bill::set_tip(session, raw)),
        Line::Tax(raw) => Ok(bill::set_tax(session, raw)),
        Line::Friends(raw) => bill::set_friends(session, raw),
        Line::Add { friend, cost, item } => order::add_order(session, item, cost, friend),
        Line::Assign { position, friend } => order::reassign_order(session, position, friend),
        Line::Cost { position, cost } => order::set_order_cost(session, position, cost),
        Line::Remove(position) => order::remove_order(session, position),
        Line::Clear => Ok(order::clear_orders(session)),
        Line::List => Ok(bill::get_split(session)),
        Line::Calculate => bill::calculate(session),
        Line::Help | Line::Quit | Line::Blank => Ok(bill::get_split(session)),
    }
}

fn next_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    Some(match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    })
}

fn usage(form: &str) -> CliError {
    CliError::invalid_argument(format!("Usage: {}", form))
}
