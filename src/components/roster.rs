//! Roster Component
//!
//! Player selection buttons plus the all-players comparison toggle.
//! Clicking a player points the chart at their history.

use leptos::*;

use crate::ledger::ViewMode;
use crate::state::global::GlobalState;

/// Player roster with chart selection
#[component]
pub fn Roster() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let players = create_memo(move |_| {
        state.ledger.with(|ledger| {
            ledger
                .players()
                .iter()
                .map(|p| (p.name.clone(), p.total_earnings, p.ticket_count()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="space-y-3">
            {move || {
                let roster = players.get();
                if roster.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">
                            "No players yet. Add the first one to get started."
                        </p>
                    }.into_view()
                } else {
                    view! {
                        <div class="flex flex-col space-y-2">
                            {roster.into_iter().map(|(name, total, tickets)| view! {
                                <PlayerButton name=name total=total tickets=tickets />
                            }).collect_view()}
                        </div>

                        <ShowAllButton />
                    }.into_view()
                }
            }}
        </div>
    }
}

/// One selectable roster row
#[component]
fn PlayerButton(name: String, total: f64, tickets: usize) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let memo_name = name.clone();
    let state_for_memo = state.clone();
    let is_active = create_memo(move |_| {
        state_for_memo
            .ledger
            .with(|ledger| ledger.view().selected() == Some(memo_name.as_str()))
    });

    let click_name = name.clone();
    let state_for_click = state;
    let on_click = move |_| state_for_click.select_player(&click_name);

    let total_class = if total > 0.0 {
        "text-green-400"
    } else if total < 0.0 {
        "text-red-400"
    } else {
        "text-gray-400"
    };
    let ticket_label = if tickets == 1 {
        "1 ticket".to_string()
    } else {
        format!("{} tickets", tickets)
    };

    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "flex items-center justify-between px-4 py-2 rounded-lg \
                            text-sm transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            <span class="font-medium">{name}</span>
            <span class="flex items-center space-x-3">
                <span class="text-xs text-gray-400">{ticket_label}</span>
                <span class=format!("font-semibold {}", total_class)>
                    {format!("{:+.2}", total)}
                </span>
            </span>
        </button>
    }
}

/// Toggle for the all-players comparison view
#[component]
fn ShowAllButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_memo = state.clone();
    let is_active = create_memo(move |_| {
        state_for_memo
            .ledger
            .with(|ledger| *ledger.view() == ViewMode::All)
    });

    let state_for_click = state;
    view! {
        <button
            on:click=move |_| state_for_click.show_all()
            class=move || {
                let base = "w-full px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            "Compare all players"
        </button>
    }
}
