//! Outcome notices
//!
//! Every ledger operation reports back as a [`Notice`] the presentation
//! layer can toast: a short title, a description with the interesting
//! values interpolated, and a severity the toast maps to styling.

use super::book::Receipt;
use super::error::LedgerError;

/// How strongly to style a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// A user-facing report of one operation's outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    /// A player joined the roster.
    pub fn player_added(name: &str) -> Self {
        Self {
            title: "Player added".to_string(),
            description: format!("{} is on the board", name),
            severity: Severity::Success,
        }
    }

    /// An outcome was recorded. Winnings and losses get different framing
    /// but both confirm that the entry landed.
    pub fn earning_recorded(receipt: &Receipt) -> Self {
        let earning = &receipt.earning;
        if earning.amount > 0.0 {
            Self {
                title: "Winning recorded".to_string(),
                description: format!(
                    "{} banked {:+.2} on {}",
                    receipt.player, earning.amount, earning.ticket
                ),
                severity: Severity::Success,
            }
        } else {
            Self {
                title: "Loss recorded".to_string(),
                description: format!(
                    "{} dropped {:+.2} on {}",
                    receipt.player, earning.amount, earning.ticket
                ),
                severity: Severity::Warning,
            }
        }
    }

    /// A mutation was rejected; nothing changed.
    pub fn rejected(err: &LedgerError) -> Self {
        Self {
            title: "Nothing recorded".to_string(),
            description: err.to_string(),
            severity: Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::Earning;

    fn receipt(amount: f64, total: f64) -> Receipt {
        Receipt {
            player: "Alice".to_string(),
            earning: Earning {
                ticket: "Ticket 3".to_string(),
                amount,
                total,
                date: "1/2/2026".to_string(),
            },
        }
    }

    #[test]
    fn test_player_added_is_a_success() {
        let notice = Notice::player_added("Alice");
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.description, "Alice is on the board");
    }

    #[test]
    fn test_winnings_and_losses_are_framed_differently() {
        let win = Notice::earning_recorded(&receipt(50.0, 80.0));
        assert_eq!(win.severity, Severity::Success);
        assert_eq!(win.title, "Winning recorded");
        assert_eq!(win.description, "Alice banked +50.00 on Ticket 3");

        let loss = Notice::earning_recorded(&receipt(-20.0, 10.0));
        assert_eq!(loss.severity, Severity::Warning);
        assert_eq!(loss.title, "Loss recorded");
        assert_eq!(loss.description, "Alice dropped -20.00 on Ticket 3");
    }

    #[test]
    fn test_zero_amount_is_framed_as_loss() {
        let push = Notice::earning_recorded(&receipt(0.0, 30.0));
        assert_eq!(push.severity, Severity::Warning);
    }

    #[test]
    fn test_rejection_carries_the_error_message() {
        let err = LedgerError::DuplicateName("Bob".to_string());
        let notice = Notice::rejected(&err);

        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.title, "Nothing recorded");
        assert_eq!(notice.description, err.to_string());
    }
}
