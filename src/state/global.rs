//! Global Application State
//!
//! Reactive state management using Leptos signals. The whole ledger sits
//! behind one `RwSignal`: every mutation swaps in the updated value and
//! every consumer re-derives what it shows from scratch.

use leptos::*;

use crate::ledger::{AggregateStats, LedgerError, Notice, PlayerLedger, Severity};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The ledger: roster, histories, and view selection
    pub ledger: RwSignal<PlayerLedger>,
    /// Notice currently showing as a toast
    pub notice: RwSignal<Option<Notice>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        ledger: create_rw_signal(PlayerLedger::new()),
        notice: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Build a fresh state outside the component tree (tests use this).
    pub fn new() -> Self {
        Self {
            ledger: create_rw_signal(PlayerLedger::new()),
            notice: create_rw_signal(None),
        }
    }

    /// Register a player and toast the outcome.
    ///
    /// Returns true when the roster changed, so forms know whether to
    /// clear their input.
    pub fn add_player(&self, name: &str) -> bool {
        let result = self
            .ledger
            .try_update(|ledger| ledger.add_player(name).map(|p| p.name.clone()));

        match result {
            Some(Ok(added)) => {
                self.push_notice(Notice::player_added(&added));
                true
            }
            Some(Err(err)) => {
                self.reject(&err);
                false
            }
            None => false,
        }
    }

    /// Record an outcome for the selected player and toast the outcome.
    ///
    /// Returns true when an earning was appended.
    pub fn add_earning(&self, raw: &str) -> bool {
        match self.ledger.try_update(|ledger| ledger.add_earning(raw)) {
            Some(Ok(receipt)) => {
                self.push_notice(Notice::earning_recorded(&receipt));
                true
            }
            Some(Err(err)) => {
                self.reject(&err);
                false
            }
            None => false,
        }
    }

    /// Point the chart at one player's history.
    pub fn select_player(&self, name: &str) {
        self.ledger.update(|ledger| ledger.select_player(name));
    }

    /// Point the chart at the all-players comparison.
    pub fn show_all(&self) {
        self.ledger.update(|ledger| ledger.show_all());
    }

    /// Current aggregate stats, derived on demand (reactive).
    pub fn stats(&self) -> AggregateStats {
        self.ledger.with(|ledger| ledger.aggregate_stats())
    }

    /// Show a notice and schedule it to clear itself.
    pub fn push_notice(&self, notice: Notice) {
        let linger = linger_ms(notice.severity);
        self.notice.set(Some(notice));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(linger, move || {
            notice_signal.set(None);
        })
        .forget();
    }

    fn reject(&self, err: &LedgerError) {
        web_sys::console::warn_1(&format!("rejected ({}): {}", err.reason(), err).into());
        self.push_notice(Notice::rejected(err));
    }
}

/// How long a toast stays up. Confirmations clear quickly; rejections
/// hang around long enough to read what went wrong.
fn linger_ms(severity: Severity) -> u32 {
    match severity {
        Severity::Success => 3000,
        Severity::Warning => 4000,
        Severity::Error => 5000,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_linger_longest() {
        assert!(linger_ms(Severity::Error) > linger_ms(Severity::Warning));
        assert!(linger_ms(Severity::Warning) > linger_ms(Severity::Success));
    }
}
