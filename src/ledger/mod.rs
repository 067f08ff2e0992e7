//! The player ledger: Wagerboard's in-memory core
//!
//! Everything the dashboard knows lives here, behind plain Rust types
//! with no web dependency. [`PlayerLedger`] holds the roster and the
//! view selection; the sibling modules derive stats and chart tables
//! from it and describe the outcomes of mutations.
//!
//! Nothing in this tree persists or talks to a network. State lasts
//! exactly as long as the value does.

pub mod book;
pub mod error;
pub mod notice;
pub mod series;
pub mod stats;
pub mod types;

pub use book::{PlayerLedger, Receipt};
pub use error::{LedgerError, LedgerResult};
pub use notice::{Notice, Severity};
pub use series::{
    all_players_series, single_player_series, ChartPoint, ComparisonTable, PlayerSeries,
};
pub use stats::AggregateStats;
pub use types::{Earning, Player, ViewMode};
