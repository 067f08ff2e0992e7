//! Navigation Component
//!
//! Header bar with the Wagerboard brand.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎟️"</span>
                        <span class="text-xl font-bold text-white">"Wagerboard"</span>
                    </A>

                    <span class="text-sm text-gray-500">"in-memory betting tracker"</span>
                </div>
            </div>
        </nav>
    }
}
