//! # billsplit CLI Library
//!
//! Front end for the bill-split engine. `main.rs` only parses arguments and
//! reports errors; everything else lives here so it can be tested.
//!
//! ## Module Organization
//! ```text
//! billsplit_cli/
//! ├── lib.rs          ◄─── You are here (logging setup & dispatch)
//! ├── args.rs         ◄─── clap definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Orders and raw bill inputs
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── order.rs    ◄─── Order editing commands
//! │   ├── bill.rs     ◄─── Bill inputs, running split, calculate
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── repl.rs         ◄─── Interactive session loop
//! ├── render.rs       ◄─── Text / JSON output
//! └── error.rs        ◄─── Error type for commands
//! ```

pub mod args;
pub mod commands;
pub mod error;
pub mod render;
pub mod repl;
pub mod state;

use std::io::{self, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use args::{Cli, Command, SplitArgs};
use commands::SplitResponse;
use error::CliError;
use render::Renderer;
use state::{ConfigState, Session};

/// Runs one invocation of the CLI.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults, then TOML file, then BILLSPLIT_* environment            │
/// │                                                                         │
/// │  2. Start Session ────────────────────────────────────────────────────► │
/// │     • friend count and tip from config unless given                     │
/// │                                                                         │
/// │  3. Dispatch ─────────────────────────────────────────────────────────► │
/// │     • split: apply every order, calculate, print                        │
/// │     • interactive: read stdin until quit or EOF                         │
/// │     • config: print the effective configuration                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> Result<(), CliError> {
    let config = ConfigState::load(cli.config.as_deref())?;
    info!(
        friends = config.default_friends,
        tip = %config.default_tip_percent,
        "configuration loaded"
    );

    let renderer = Renderer::new(&config, cli.json);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Split(args) => {
            let response = split(&config, &args)?;
            renderer.split(&mut out, &response)?;
        }
        Command::Interactive => {
            let mut session = Session::new(config.default_friends, config.default_tip_percent.clone());
            let stdin = io::stdin();
            repl::run(&mut session, renderer, stdin.lock(), &mut out)?;
        }
        Command::Config => {
            renderer.config(&mut out, &commands::config::get_config(&config))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Builds a session from `split` arguments and runs the final calculation.
pub fn split(config: &ConfigState, args: &SplitArgs) -> Result<SplitResponse, CliError> {
    let tip = args
        .tip
        .clone()
        .unwrap_or_else(|| config.default_tip_percent.clone());
    let mut session = Session::new(config.default_friends, tip);

    if let Some(friends) = args.friends {
        session.set_participant_count(friends)?;
    }
    session.set_total_bill(args.bill.trim());
    session.set_tax(args.tax.trim());

    for spec in &args.orders {
        let (item, cost, friend) = commands::order::parse_order_spec(spec)?;
        commands::order::add_order(&mut session, item, cost, friend)?;
    }

    info!(
        orders = session.orders.len(),
        friends = session.participant_count,
        "splitting bill"
    );
    commands::bill::calculate(&session)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout stays clean for results.
///
/// ## Log Levels
/// - `RUST_LOG=billsplit=debug` - Override everything below
/// - `-v` - Debug for billsplit crates
/// - `-vv` - Trace for billsplit crates
/// - Default: WARN
pub fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "warn,billsplit_cli=debug,billsplit_core=debug",
        _ => "warn,billsplit_cli=trace,billsplit_core=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use billsplit_core::{Decimal, Money, MAX_PARTICIPANTS};

    fn args(orders: &[&str]) -> SplitArgs {
        SplitArgs {
            bill: "100".to_string(),
            tip: Some("10".to_string()),
            tax: String::new(),
            friends: Some(2),
            orders: orders.iter().map(|spec| spec.to_string()).collect(),
        }
    }

    #[test]
    fn test_split() {
        let response = split(&ConfigState::default(), &args(&["Pasta:30:1", "Steak:70:2"])).unwrap();

        assert_eq!(
            response.summary.result.totals().unwrap(),
            &[Money::from_cents(3300), Money::from_cents(7700)]
        );
    }

    #[test]
    fn test_split_uses_config_defaults() {
        let config = ConfigState {
            default_friends: 3,
            default_tip_percent: "20".to_string(),
            ..ConfigState::default()
        };
        let mut split_args = args(&["Soup:10:3"]);
        split_args.tip = None;
        split_args.friends = None;

        let response = split(&config, &split_args).unwrap();
        assert_eq!(response.participant_count, 3);
        assert_eq!(response.summary.grand_total, Decimal::new(12000, 2));
    }

    #[test]
    fn test_split_rejects_bad_input() {
        let err = split(&ConfigState::default(), &args(&["Soda:free:1"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = split(&ConfigState::default(), &args(&["Soda"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);

        let mut zero = args(&[]);
        zero.friends = Some(0);
        let err = split(&ConfigState::default(), &zero).unwrap_err();
        assert_eq!(err.message, "Number of friends must be at least 1");
    }

    #[test]
    fn test_split_rejects_too_many_friends() {
        let mut crowd = args(&["Soup:10:1"]);
        crowd.friends = Some(MAX_PARTICIPANTS + 1);
        let err = split(&ConfigState::default(), &crowd).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Number of friends must be at most 1000");

        crowd.friends = Some(usize::MAX);
        assert!(split(&ConfigState::default(), &crowd).is_err());
    }

    #[test]
    fn test_split_with_largest_amounts() {
        let max = billsplit_core::MAX_AMOUNT.to_plain_string();
        let mut big = args(&[]);
        big.bill = max.clone();
        big.tip = Some("1000".to_string());
        big.tax = max.clone();
        big.orders = vec![format!("Yacht:{}:1", max), format!("Jet:{}:2", max)];

        let response = split(&ConfigState::default(), &big).unwrap();
        let totals = response.formatted_totals.unwrap();
        assert_eq!(totals, vec!["600000000000.00", "600000000000.00"]);
    }
}
