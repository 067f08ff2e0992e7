//! Chart-ready projections of player histories
//!
//! The chart never reaches into [`Player`] directly; it consumes plain
//! tables built here. Either a single player's (ticket, total) run, or
//! every player resampled onto the union of their ticket labels.

use std::collections::BTreeSet;

use serde::Serialize;

use super::types::Player;

/// One point on a single-player line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub ticket: String,
    pub total: f64,
}

/// A player's totals resampled onto a shared label axis.
///
/// `totals` is parallel to the owning table's `tickets`. `None` marks a
/// ticket this player never reached; consumers must break the line there
/// rather than substitute zero.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerSeries {
    pub player: String,
    pub totals: Vec<Option<f64>>,
}

/// The all-players comparison table.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ComparisonTable {
    /// Union of every ticket label, sorted as strings. String order puts
    /// "Ticket 10" before "Ticket 2" once any player passes nine tickets;
    /// the axis stays that way because labels sort as text, not numbers.
    pub tickets: Vec<String>,
    /// One row per player, in roster order
    pub series: Vec<PlayerSeries>,
}

/// A player's stored history as (ticket, total) points, chronological.
pub fn single_player_series(player: &Player) -> Vec<ChartPoint> {
    player
        .earnings
        .iter()
        .map(|e| ChartPoint {
            ticket: e.ticket.clone(),
            total: e.total,
        })
        .collect()
}

/// Overlay every player on the union of their ticket labels.
pub fn all_players_series(players: &[Player]) -> ComparisonTable {
    let tickets: Vec<String> = players
        .iter()
        .flat_map(|p| p.earnings.iter().map(|e| e.ticket.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let series = players
        .iter()
        .map(|p| PlayerSeries {
            player: p.name.clone(),
            totals: tickets
                .iter()
                .map(|ticket| {
                    p.earnings
                        .iter()
                        .find(|e| &e.ticket == ticket)
                        .map(|e| e.total)
                })
                .collect(),
        })
        .collect();

    ComparisonTable { tickets, series }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, amounts: &[f64]) -> Player {
        let mut player = Player::new(name);
        for amount in amounts {
            player.record(*amount, "1/2/2026");
        }
        player
    }

    #[test]
    fn test_single_series_preserves_stored_order() {
        let alice = player("Alice", &[50.0, -20.0]);
        let series = single_player_series(&alice);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].ticket, "Ticket 1");
        assert_eq!(series[0].total, 50.0);
        assert_eq!(series[1].ticket, "Ticket 2");
        assert_eq!(series[1].total, 30.0);
    }

    #[test]
    fn test_single_series_of_fresh_player_is_empty() {
        assert!(single_player_series(&player("Alice", &[])).is_empty());
    }

    #[test]
    fn test_comparison_marks_missing_tickets_explicitly() {
        let players = vec![player("Alice", &[10.0]), player("Bob", &[5.0, 5.0])];
        let table = all_players_series(&players);

        assert_eq!(table.tickets, vec!["Ticket 1", "Ticket 2"]);

        assert_eq!(table.series[0].player, "Alice");
        assert_eq!(table.series[0].totals, vec![Some(10.0), None]);

        assert_eq!(table.series[1].player, "Bob");
        assert_eq!(table.series[1].totals, vec![Some(5.0), Some(10.0)]);
    }

    #[test]
    fn test_axis_sorts_labels_as_text() {
        let players = vec![player("Alice", &[1.0; 10])];
        let table = all_players_series(&players);

        // "Ticket 10" lands between "Ticket 1" and "Ticket 2"
        assert_eq!(table.tickets[0], "Ticket 1");
        assert_eq!(table.tickets[1], "Ticket 10");
        assert_eq!(table.tickets[2], "Ticket 2");
        assert_eq!(table.tickets.len(), 10);

        // Every slot still carries this player's total
        assert!(table.series[0].totals.iter().all(|t| t.is_some()));
    }

    #[test]
    fn test_comparison_of_empty_roster_is_empty() {
        let table = all_players_series(&[]);
        assert!(table.tickets.is_empty());
        assert!(table.series.is_empty());
    }

    #[test]
    fn test_players_without_tickets_get_all_none_rows() {
        let players = vec![player("Alice", &[10.0]), player("Idle", &[])];
        let table = all_players_series(&players);

        assert_eq!(table.series[1].player, "Idle");
        assert_eq!(table.series[1].totals, vec![None]);
    }
}
