//! # State Module
//!
//! State owned by the CLI for the lifetime of one run.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │        Session           │        │       ConfigState        │      │
//! │  │                          │        │                          │      │
//! │  │  orders: Vec<Order>      │        │  currency_symbol         │      │
//! │  │  raw bill / tip / tax    │        │  default_friends         │      │
//! │  │  participant_count       │        │  default_tip_percent     │      │
//! │  └────────────┬─────────────┘        └──────────────────────────┘      │
//! │               │ snapshot()                                             │
//! │               ▼                                                         │
//! │     (Vec<Order>, BillParameters) ──► billsplit-core                    │
//! │                                                                         │
//! │  Session: mutated by one command at a time                             │
//! │  ConfigState: read-only after load                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState};
pub use session::Session;
