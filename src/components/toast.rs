//! Toast Notification Component
//!
//! Surfaces the ledger's outcome notices.

use leptos::*;

use crate::ledger::{Notice, Severity};
use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2">
            {move || {
                state.notice.get().map(|notice| view! {
                    <ToastMessage notice=notice />
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let (icon, bg_class) = match notice.severity {
        Severity::Success => ("✓", "bg-green-600"),
        Severity::Warning => ("⚠", "bg-yellow-600"),
        Severity::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <div>
                <div class="text-sm font-semibold">{notice.title}</div>
                <div class="text-sm">{notice.description}</div>
            </div>
        </div>
    }
}
