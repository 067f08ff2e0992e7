//! Core data types for the player ledger
//!
//! - [`Earning`]: one recorded outcome carrying its running-total snapshot
//! - [`Player`]: a named participant owning an ordered earning history
//! - [`ViewMode`]: which chart the dashboard is currently showing

use serde::{Deserialize, Serialize};

/// One recorded betting outcome for a player.
///
/// Earnings are append-only: once recorded they are never edited, removed,
/// or moved to another player. The `total` field is the owner's running
/// sum after this entry, captured at record time so history rows and chart
/// points need no recomputation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Earning {
    /// Generated label, "Ticket N", sequential within the owning player
    #[serde(rename = "match")]
    pub ticket: String,
    /// Signed delta for this ticket (positive = winning, negative = loss)
    pub amount: f64,
    /// The player's running total after applying `amount`
    pub total: f64,
    /// Calendar date the entry was recorded, as a display string
    pub date: String,
}

/// A named participant whose outcomes are tracked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    /// Display name; uniqueness (case-insensitive) is enforced by the ledger
    pub name: String,
    /// Ordered history, insertion order is chronological order
    pub earnings: Vec<Earning>,
    /// Running sum of all earning amounts; may be negative
    pub total_earnings: f64,
}

impl Player {
    /// Create a player with no history.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            earnings: Vec::new(),
            total_earnings: 0.0,
        }
    }

    /// Append an outcome, updating the running total.
    ///
    /// The ticket label and total snapshot are derived here, under the
    /// same mutable borrow that stores them, so they can never drift from
    /// the history they describe. Returns a copy of the stored entry.
    pub fn record(&mut self, amount: f64, date: impl Into<String>) -> Earning {
        let total = self.total_earnings + amount;
        let earning = Earning {
            ticket: format!("Ticket {}", self.earnings.len() + 1),
            amount,
            total,
            date: date.into(),
        };
        self.total_earnings = total;
        self.earnings.push(earning.clone());
        earning
    }

    /// True when the player is ahead overall. Breaking even does not count.
    pub fn is_profitable(&self) -> bool {
        self.total_earnings > 0.0
    }

    /// Number of recorded tickets.
    pub fn ticket_count(&self) -> usize {
        self.earnings.len()
    }
}

/// Which chart the dashboard is currently showing.
///
/// The selection travels as a player *name*, not an index or handle:
/// every consumer re-resolves it against the roster on read, so a rebuilt
/// collection can never leave a stale reference behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewMode {
    /// Nothing selected yet
    #[default]
    None,
    /// One player's cumulative line
    Single(String),
    /// Every player overlaid on a shared ticket axis
    All,
}

impl ViewMode {
    /// Name of the selected player, when in single-player mode.
    pub fn selected(&self) -> Option<&str> {
        match self {
            ViewMode::Single(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_snapshots_running_total() {
        let mut player = Player::new("Alice");
        let first = player.record(50.0, "1/2/2026");
        let second = player.record(-20.0, "1/3/2026");

        assert_eq!(first.ticket, "Ticket 1");
        assert_eq!(first.amount, 50.0);
        assert_eq!(first.total, 50.0);

        assert_eq!(second.ticket, "Ticket 2");
        assert_eq!(second.amount, -20.0);
        assert_eq!(second.total, 30.0);

        assert_eq!(player.total_earnings, 30.0);
        assert_eq!(player.earnings, vec![first, second]);
    }

    #[test]
    fn test_ticket_labels_are_sequential() {
        let mut player = Player::new("Bob");
        for n in 1..=3 {
            let earning = player.record(1.0, "1/1/2026");
            assert_eq!(earning.ticket, format!("Ticket {}", n));
        }
        assert_eq!(player.ticket_count(), 3);
    }

    #[test]
    fn test_zero_amount_is_a_valid_entry() {
        let mut player = Player::new("Cara");
        player.record(10.0, "1/1/2026");
        let push = player.record(0.0, "1/1/2026");

        assert_eq!(push.total, 10.0);
        assert_eq!(player.ticket_count(), 2);
    }

    #[test]
    fn test_profitability_requires_positive_total() {
        let mut winner = Player::new("Winner");
        winner.record(5.0, "1/1/2026");
        assert!(winner.is_profitable());

        let mut loser = Player::new("Loser");
        loser.record(-5.0, "1/1/2026");
        assert!(!loser.is_profitable());

        let breakeven = Player::new("Even");
        assert!(!breakeven.is_profitable());
    }

    #[test]
    fn test_earning_serializes_ticket_as_match() {
        let earning = Earning {
            ticket: "Ticket 1".to_string(),
            amount: 12.5,
            total: 12.5,
            date: "1/2/2026".to_string(),
        };

        let json = serde_json::to_value(&earning).unwrap();
        assert_eq!(json["match"], "Ticket 1");
        assert!(json.get("ticket").is_none());

        let back: Earning = serde_json::from_value(json).unwrap();
        assert_eq!(back, earning);
    }

    #[test]
    fn test_view_mode_selected_name() {
        assert_eq!(ViewMode::None.selected(), None);
        assert_eq!(ViewMode::All.selected(), None);
        assert_eq!(
            ViewMode::Single("Alice".to_string()).selected(),
            Some("Alice")
        );
        assert_eq!(ViewMode::default(), ViewMode::None);
    }
}
