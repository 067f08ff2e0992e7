//! Wagerboard
//!
//! Betting-outcome dashboard built with Leptos (WASM).
//!
//! This is a client-side rendered (CSR) application. Every interaction
//! mutates the in-memory ledger and re-renders synchronously; nothing is
//! persisted or sent anywhere.

use leptos::*;

use wagerboard::app::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <App /> });
}
