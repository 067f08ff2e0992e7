//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod chart;
pub mod entry;
pub mod roster;
pub mod stat_card;
pub mod toast;

pub use nav::Nav;
pub use chart::Chart;
pub use entry::{EarningEntry, PlayerEntry};
pub use roster::Roster;
pub use stat_card::{StatCard, StatKind};
pub use toast::Toast;
