//! Dashboard Page
//!
//! The single Wagerboard view: aggregate stats, the cumulative chart,
//! the roster, entry forms, and the selected player's ticket history.

use leptos::*;

use crate::components::{Chart, EarningEntry, PlayerEntry, Roster, StatCard, StatKind};
use crate::ledger::ViewMode;
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let view_label = create_memo(move |_| {
        state.ledger.with(|ledger| match ledger.view() {
            ViewMode::None => "Nothing selected".to_string(),
            ViewMode::Single(name) => format!("Tracking {}", name),
            ViewMode::All => "Comparing all players".to_string(),
        })
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Betting outcomes, ticket by ticket"</p>
                </div>

                // Current chart selection
                <div class="text-sm text-gray-400">
                    {move || view_label.get()}
                </div>
            </div>

            // Aggregate stats row
            <section>
                <h2 class="text-lg font-semibold mb-4">"The Board"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <StatCard kind=StatKind::Players />
                    <StatCard kind=StatKind::CombinedWinnings />
                    <StatCard kind=StatKind::ProfitablePlayers />
                    <StatCard kind=StatKind::WinRate />
                </div>
            </section>

            // Main chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Cumulative Winnings"</h2>
                <Chart />
            </section>

            // Roster and entry forms
            <div class="grid md:grid-cols-3 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Players"</h2>
                    <Roster />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"New Player"</h2>
                    <PlayerEntry />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Record Outcome"</h2>
                    <EarningEntry />
                </section>
            </div>

            // History for the selected player
            <TicketHistory />
        </div>
    }
}

/// Recent tickets for the selected player, newest first
#[component]
fn TicketHistory() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Ticket History"</h2>

            <div class="space-y-2">
                {move || {
                    let earnings = state
                        .ledger
                        .with(|ledger| ledger.selected_player().map(|p| p.earnings.clone()));

                    match earnings {
                        None => view! {
                            <p class="text-gray-400 text-sm">
                                "Select a player to see their tickets."
                            </p>
                        }.into_view(),
                        Some(earnings) if earnings.is_empty() => view! {
                            <p class="text-gray-400 text-sm">"No tickets yet for this player."</p>
                        }.into_view(),
                        Some(earnings) => {
                            earnings.iter().rev().take(8).map(|earning| {
                                let amount_class = if earning.amount > 0.0 {
                                    "text-green-400"
                                } else {
                                    "text-red-400"
                                };

                                view! {
                                    <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                        <div class="flex items-center space-x-3">
                                            <span class="font-medium">{earning.ticket.clone()}</span>
                                            <span class="text-gray-400 text-sm">{earning.date.clone()}</span>
                                        </div>
                                        <div class="flex items-center space-x-4">
                                            <span class=format!("font-semibold {}", amount_class)>
                                                {format!("{:+.2}", earning.amount)}
                                            </span>
                                            <span class="text-gray-400 text-sm">
                                                {format!("total {:+.2}", earning.total)}
                                            </span>
                                        </div>
                                    </div>
                                }
                            }).collect_view()
                        }
                    }
                }}
            </div>
        </section>
    }
}
