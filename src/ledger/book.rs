//! The player ledger
//!
//! [`PlayerLedger`] owns the roster and the transient view selection, and
//! is the single mutation point for both. Mutations validate first and
//! touch state only after every check has passed, so a rejected call
//! leaves the ledger exactly as it was.

use chrono::Local;

use super::error::{LedgerError, LedgerResult};
use super::stats::AggregateStats;
use super::types::{Earning, Player, ViewMode};

/// Receipt for a recorded outcome: the player it landed on plus the
/// stored entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub player: String,
    pub earning: Earning,
}

/// In-memory roster of players plus the dashboard's view selection.
///
/// Player names are unique case-insensitively. Insertion order is display
/// order. There is no delete: players and their earnings live as long as
/// the browser tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerLedger {
    players: Vec<Player>,
    view: ViewMode,
}

impl PlayerLedger {
    /// Create an empty ledger with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// All players in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Current view selection.
    pub fn view(&self) -> &ViewMode {
        &self.view
    }

    /// Resolve a player by exact name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Re-resolve the current selection against the roster.
    pub fn selected_player(&self) -> Option<&Player> {
        self.view.selected().and_then(|name| self.player(name))
    }

    /// Number of tickets recorded across every player.
    pub fn ticket_count(&self) -> usize {
        self.players.iter().map(|p| p.earnings.len()).sum()
    }

    /// Register a new player with an empty history.
    ///
    /// The name is trimmed before validation and stored trimmed. Rejects
    /// empty names and names colliding case-insensitively with an existing
    /// player. Registering does not change the view selection.
    pub fn add_player(&mut self, name: &str) -> LedgerResult<&Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        if self.contains_name(name) {
            return Err(LedgerError::DuplicateName(name.to_string()));
        }

        let idx = self.players.len();
        self.players.push(Player::new(name));
        Ok(&self.players[idx])
    }

    fn contains_name(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.players.iter().any(|p| p.name.to_lowercase() == needle)
    }

    /// Record an outcome for the currently selected player, stamped with
    /// today's date.
    ///
    /// `raw` is the untouched text from the amount field; parsing happens
    /// here so the whole validation story lives in one place.
    pub fn add_earning(&mut self, raw: &str) -> LedgerResult<Receipt> {
        self.add_earning_dated(raw, today())
    }

    /// Like [`add_earning`](Self::add_earning), with the date stamp
    /// supplied by the caller.
    pub fn add_earning_dated(
        &mut self,
        raw: &str,
        date: impl Into<String>,
    ) -> LedgerResult<Receipt> {
        let raw = raw.trim();
        let name = match self.view.selected() {
            Some(name) if !raw.is_empty() => name.to_string(),
            _ => return Err(LedgerError::MissingInput),
        };
        let amount = parse_amount(raw)?;

        let player = self
            .players
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or(LedgerError::MissingInput)?;

        Ok(Receipt {
            earning: player.record(amount, date),
            player: name,
        })
    }

    /// Derive the roster-wide summary for the stat cards.
    pub fn aggregate_stats(&self) -> AggregateStats {
        AggregateStats::from_players(&self.players)
    }

    /// Switch the chart to one player's history. Unknown names are ignored
    /// so the selection can never point at a player that does not exist.
    pub fn select_player(&mut self, name: &str) {
        if self.player(name).is_some() {
            self.view = ViewMode::Single(name.to_string());
        }
    }

    /// Switch the chart to the all-players comparison.
    pub fn show_all(&mut self) {
        self.view = ViewMode::All;
    }
}

/// Parse an amount string as a finite decimal.
///
/// `str::parse::<f64>` rejects trailing garbage outright ("1.2.3" is an
/// error, not 1.2). The finiteness check throws out "NaN" and "inf",
/// which parse but are not amounts.
fn parse_amount(raw: &str) -> LedgerResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| LedgerError::NotANumber(raw.to_string()))
}

/// Today's date as the display stamp carried on each ticket.
fn today() -> String {
    Local::now().format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with(names: &[&str]) -> PlayerLedger {
        let mut ledger = PlayerLedger::new();
        for name in names {
            ledger.add_player(name).unwrap();
        }
        ledger
    }

    #[test]
    fn test_add_player_trims_and_stores() {
        let mut ledger = PlayerLedger::new();
        let player = ledger.add_player("  Alice  ").unwrap();

        assert_eq!(player.name, "Alice");
        assert_eq!(player.total_earnings, 0.0);
        assert!(player.earnings.is_empty());
        assert_eq!(ledger.view(), &ViewMode::None);
    }

    #[test]
    fn test_add_player_rejects_blank_names() {
        let mut ledger = PlayerLedger::new();
        assert_eq!(ledger.add_player(""), Err(LedgerError::EmptyName));
        assert_eq!(ledger.add_player("   "), Err(LedgerError::EmptyName));
        assert!(ledger.players().is_empty());
    }

    #[test]
    fn test_add_player_rejects_case_insensitive_duplicates() {
        let mut ledger = ledger_with(&["Alice"]);

        assert_eq!(
            ledger.add_player("alice"),
            Err(LedgerError::DuplicateName("alice".to_string()))
        );
        assert_eq!(
            ledger.add_player(" ALICE "),
            Err(LedgerError::DuplicateName("ALICE".to_string()))
        );
        assert_eq!(ledger.players().len(), 1);
    }

    #[test]
    fn test_add_earning_needs_selection_and_amount() {
        let mut ledger = ledger_with(&["Alice"]);

        // No selection yet
        assert_eq!(
            ledger.add_earning_dated("50", "1/2/2026"),
            Err(LedgerError::MissingInput)
        );

        // Selection but blank amount
        ledger.select_player("Alice");
        assert_eq!(
            ledger.add_earning_dated("", "1/2/2026"),
            Err(LedgerError::MissingInput)
        );
        assert_eq!(
            ledger.add_earning_dated("   ", "1/2/2026"),
            Err(LedgerError::MissingInput)
        );

        // The comparison view has no single selection either
        ledger.show_all();
        assert_eq!(
            ledger.add_earning_dated("50", "1/2/2026"),
            Err(LedgerError::MissingInput)
        );

        assert_eq!(ledger.ticket_count(), 0);
    }

    #[test]
    fn test_add_earning_rejects_non_numbers() {
        let mut ledger = ledger_with(&["Alice"]);
        ledger.select_player("Alice");

        for raw in ["abc", "1.2.3", "12abc", "NaN", "inf", "-inf"] {
            assert_eq!(
                ledger.add_earning_dated(raw, "1/2/2026"),
                Err(LedgerError::NotANumber(raw.to_string())),
                "{:?} should be rejected",
                raw
            );
        }
        assert_eq!(ledger.player("Alice").unwrap().total_earnings, 0.0);
        assert_eq!(ledger.ticket_count(), 0);
    }

    #[test]
    fn test_add_earning_accepts_signed_decimals() {
        let mut ledger = ledger_with(&["Alice"]);
        ledger.select_player("Alice");

        for (raw, amount) in [("+5", 5.0), ("-2.5", -2.5), ("0", 0.0), ("  7 ", 7.0)] {
            let receipt = ledger.add_earning_dated(raw, "1/2/2026").unwrap();
            assert_eq!(receipt.earning.amount, amount, "{:?}", raw);
        }
    }

    #[test]
    fn test_add_earning_appends_with_running_total() {
        let mut ledger = ledger_with(&["Alice"]);
        ledger.select_player("Alice");

        let win = ledger.add_earning_dated("50", "1/2/2026").unwrap();
        assert_eq!(win.player, "Alice");
        assert_eq!(win.earning.ticket, "Ticket 1");
        assert_eq!(win.earning.total, 50.0);

        let loss = ledger.add_earning_dated("-20", "1/3/2026").unwrap();
        assert_eq!(loss.earning.ticket, "Ticket 2");
        assert_eq!(loss.earning.amount, -20.0);
        assert_eq!(loss.earning.total, 30.0);

        let alice = ledger.player("Alice").unwrap();
        assert_eq!(alice.total_earnings, 30.0);
        assert_eq!(alice.earnings.len(), 2);
    }

    #[test]
    fn test_totals_are_prefix_sums() {
        let mut ledger = ledger_with(&["Alice"]);
        ledger.select_player("Alice");

        let amounts = [3.5, -1.25, 10.0, 0.0, -12.5];
        for amount in amounts {
            ledger
                .add_earning_dated(&amount.to_string(), "1/2/2026")
                .unwrap();
        }

        let alice = ledger.player("Alice").unwrap();
        let mut running = 0.0;
        for (earning, amount) in alice.earnings.iter().zip(amounts) {
            running += amount;
            assert_eq!(earning.amount, amount);
            assert_eq!(earning.total, running);
        }
        assert_eq!(alice.total_earnings, running);
    }

    #[test]
    fn test_add_earning_leaves_other_players_alone() {
        let mut ledger = ledger_with(&["Alice", "Bob"]);
        ledger.select_player("Bob");
        ledger.add_earning_dated("10", "1/2/2026").unwrap();

        assert_eq!(ledger.player("Alice").unwrap().ticket_count(), 0);
        assert_eq!(ledger.player("Bob").unwrap().ticket_count(), 1);
    }

    #[test]
    fn test_add_earning_stamps_today() {
        let mut ledger = ledger_with(&["Alice"]);
        ledger.select_player("Alice");

        let receipt = ledger.add_earning("5").unwrap();
        assert!(receipt.earning.date.contains('/'));
    }

    #[test]
    fn test_selection_re_resolves_after_mutation() {
        let mut ledger = ledger_with(&["Alice", "Bob"]);
        ledger.select_player("Alice");
        ledger.add_earning_dated("25", "1/2/2026").unwrap();

        let selected = ledger.selected_player().unwrap();
        assert_eq!(selected.name, "Alice");
        assert_eq!(selected.total_earnings, 25.0);
    }

    #[test]
    fn test_select_unknown_name_is_ignored() {
        let mut ledger = ledger_with(&["Alice"]);
        ledger.select_player("Mallory");
        assert_eq!(ledger.view(), &ViewMode::None);
        assert!(ledger.selected_player().is_none());

        // Exact match only; selection is not case-folded
        ledger.select_player("alice");
        assert_eq!(ledger.view(), &ViewMode::None);
    }

    #[test]
    fn test_show_all_clears_single_selection() {
        let mut ledger = ledger_with(&["Alice"]);
        ledger.select_player("Alice");
        ledger.show_all();

        assert_eq!(ledger.view(), &ViewMode::All);
        assert!(ledger.selected_player().is_none());
    }

    #[test]
    fn test_ticket_count_spans_players() {
        let mut ledger = ledger_with(&["Alice", "Bob"]);
        ledger.select_player("Alice");
        ledger.add_earning_dated("1", "1/2/2026").unwrap();
        ledger.select_player("Bob");
        ledger.add_earning_dated("2", "1/2/2026").unwrap();
        ledger.add_earning_dated("3", "1/2/2026").unwrap();

        assert_eq!(ledger.ticket_count(), 3);
    }
}
