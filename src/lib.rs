//! # Wagerboard
//!
//! Betting-outcome dashboard: a client-side rendered (CSR) Leptos
//! application that tracks winnings and losses per player and charts
//! cumulative totals ticket by ticket.
//!
//! ## Features
//!
//! - **Player roster**: unique names (case-insensitive), add-only
//! - **Ticket log**: signed amounts with running-total snapshots
//! - **Derived views**: aggregate stats, single-player series, all-players comparison
//! - **Notices**: every operation reports back as a toastable outcome
//!
//! ## Architecture
//!
//! All state lives in memory for the lifetime of the browser tab. The
//! [`ledger`] tree is pure Rust with no web dependency; everything else
//! is the Leptos presentation reading and mutating that core through
//! signals.
//!
//! ## Quick Start
//!
//! ```rust
//! use wagerboard::ledger::PlayerLedger;
//!
//! let mut ledger = PlayerLedger::new();
//! ledger.add_player("Alice").unwrap();
//! ledger.select_player("Alice");
//!
//! let receipt = ledger.add_earning("50").unwrap();
//! assert_eq!(receipt.earning.ticket, "Ticket 1");
//! assert_eq!(receipt.earning.total, 50.0);
//!
//! let stats = ledger.aggregate_stats();
//! assert_eq!(stats.win_rate, 100);
//! ```

pub mod app;
pub mod components;
pub mod ledger;
pub mod pages;
pub mod state;

// Re-export the core types for convenience
pub use ledger::{
    AggregateStats, Earning, LedgerError, LedgerResult, Notice, Player, PlayerLedger, Receipt,
    Severity, ViewMode,
};
