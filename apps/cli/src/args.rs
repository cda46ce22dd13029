//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "billsplit")]
#[command(about = "Split a shared bill between friends, tip and tax included")]
#[command(version)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// TOML config file (default: ./billsplit.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a bill given entirely on the command line
    Split(SplitArgs),

    /// Enter orders one line at a time and watch the split update
    Interactive,

    /// Show the effective configuration
    Config,
}

#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Total bill before tip and tax
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub bill: String,

    /// Tip percentage (default from config)
    #[arg(long, allow_hyphen_values = true)]
    pub tip: Option<String>,

    /// Flat tax amount
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub tax: String,

    /// Number of friends splitting (default from config)
    #[arg(long)]
    pub friends: Option<usize>,

    /// One order; repeat for more. FRIEND is 1-based.
    #[arg(long = "order", value_name = "ITEM:COST:FRIEND")]
    pub orders: Vec<String>,
}
