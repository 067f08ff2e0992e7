//! Aggregate statistics
//!
//! Roster-wide numbers for the dashboard's stat cards, derived fresh from
//! the player list on every read.

use serde::Serialize;

use super::types::Player;

/// Roster-wide summary shown across the top of the dashboard.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct AggregateStats {
    /// Number of players tracked
    pub total_players: usize,
    /// Sum of every player's running total; may be negative
    pub total_winnings: f64,
    /// Players whose running total is strictly positive
    pub profitable_players: usize,
    /// Percentage of players in profit, rounded to the nearest integer
    pub win_rate: u32,
}

impl AggregateStats {
    /// Derive the summary from the roster.
    ///
    /// `win_rate` rounds half away from zero, so 1 of 8 players in profit
    /// reads 13%, not 12%. An empty roster reports 0 rather than dividing
    /// by zero.
    pub fn from_players(players: &[Player]) -> Self {
        let total_players = players.len();
        let total_winnings = players.iter().map(|p| p.total_earnings).sum();
        let profitable_players = players.iter().filter(|p| p.is_profitable()).count();
        let win_rate = if total_players == 0 {
            0
        } else {
            (100.0 * profitable_players as f64 / total_players as f64).round() as u32
        };

        Self {
            total_players,
            total_winnings,
            profitable_players,
            win_rate,
        }
    }
}
