//! Entry Forms
//!
//! Forms for registering players and recording ticket outcomes. Both
//! submit straight into the ledger; the state layer toasts the result.

use leptos::*;

use crate::state::global::GlobalState;

/// Add-player form
#[component]
pub fn PlayerEntry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Only a registered player clears the field; rejected input
        // stays put for correction
        if state.add_player(&name.get()) {
            set_name.set(String::new());
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-3">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Player name"</label>
                <input
                    type="text"
                    placeholder="e.g. Alice"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3
                       font-semibold transition-colors"
            >
                "Add Player"
            </button>
        </form>
    }
}

/// Quick-fill amounts offered under the input
const QUICK_AMOUNTS: [f64; 6] = [-100.0, -25.0, -5.0, 5.0, 25.0, 100.0];

/// Add-earning form for the selected player
#[component]
pub fn EarningEntry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (amount, set_amount) = create_signal(String::new());

    let state_for_selected = state.clone();
    let selected = create_memo(move |_| {
        state_for_selected
            .ledger
            .with(|ledger| ledger.selected_player().map(|p| p.name.clone()))
    });

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if state_for_submit.add_earning(&amount.get()) {
            set_amount.set(String::new());
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-3">
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    "Amount for "
                    <span class="text-white font-medium">
                        {move || selected.get().unwrap_or_else(|| "nobody yet".to_string())}
                    </span>
                </label>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="positive win, negative loss"
                    prop:value=move || amount.get()
                    on:input=move |ev| set_amount.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Quick amount buttons
            <div class="flex justify-between">
                {QUICK_AMOUNTS.into_iter().map(|v| view! {
                    <button
                        type="button"
                        on:click=move |_| set_amount.set(v.to_string())
                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
                    >
                        {format!("{:+}", v)}
                    </button>
                }).collect_view()}
            </div>

            <button
                type="submit"
                disabled=move || selected.get().is_none()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                "Record Ticket"
            </button>
        </form>
    }
}
