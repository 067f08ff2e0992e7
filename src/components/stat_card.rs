//! Stat Card Component
//!
//! Displays one roster-wide aggregate from the ledger.

use leptos::*;

use crate::state::global::GlobalState;

/// Which aggregate a card shows.
#[derive(Clone, Copy, PartialEq)]
pub enum StatKind {
    Players,
    CombinedWinnings,
    ProfitablePlayers,
    WinRate,
}

impl StatKind {
    fn label(self) -> &'static str {
        match self {
            StatKind::Players => "Players tracked",
            StatKind::CombinedWinnings => "Combined winnings",
            StatKind::ProfitablePlayers => "In profit",
            StatKind::WinRate => "Win rate",
        }
    }
}

/// Aggregate stat card
#[component]
pub fn StatCard(kind: StatKind) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_value = state.clone();
    let value = create_memo(move |_| {
        let stats = state_for_value.stats();
        match kind {
            StatKind::Players => stats.total_players.to_string(),
            StatKind::CombinedWinnings => format!("{:+.2}", stats.total_winnings),
            StatKind::ProfitablePlayers => {
                format!("{} of {}", stats.profitable_players, stats.total_players)
            }
            StatKind::WinRate => format!("{}%", stats.win_rate),
        }
    });

    // Combined winnings get colored by sign; everything else stays neutral
    let state_for_tone = state;
    let tone = create_memo(move |_| {
        if kind != StatKind::CombinedWinnings {
            return "text-white";
        }
        let total = state_for_tone.stats().total_winnings;
        if total > 0.0 {
            "text-green-400"
        } else if total < 0.0 {
            "text-red-400"
        } else {
            "text-white"
        }
    });

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{kind.label()}</span>
            <div class=move || format!("text-3xl font-bold mt-2 {}", tone.get())>
                {move || value.get()}
            </div>
        </div>
    }
}
