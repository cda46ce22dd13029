//! # Commands Module
//!
//! Every action a front end can take on a session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── order.rs    ◄─── Add, reassign, re-price, remove, clear orders
//! ├── bill.rs     ◄─── Bill/tip/tax/friends inputs, running split, calculate
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front end (split args / interactive line)                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::order::add_order(&mut session, "Soda", "5.50", "2")          │
//! │         │                                                               │
//! │         ├── mutate Session                                              │
//! │         └── session.snapshot() ──► billsplit-core ──► SplitResponse    │
//! │                                                                         │
//! │  Result<SplitResponse, CliError> ──► render (text or JSON)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every edit answers with the recomputed running split, so totals stay
//! current as orders change. Only [`bill::calculate`] runs submission
//! validation.

pub mod bill;
pub mod config;
pub mod order;

pub use bill::SplitResponse;
