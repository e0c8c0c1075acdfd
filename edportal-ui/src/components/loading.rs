//! Loading Component
//!
//! Loading spinners and placeholder screens.

use leptos::*;

/// Spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3 text-gray-400">
            <div class="loading-spinner w-8 h-8" />
            <span>{label}</span>
        </div>
    }
}

/// Full-screen placeholder shown until the session resolves
#[component]
pub fn PortalLoading() -> impl IntoView {
    view! {
        <div class="h-screen flex items-center justify-center text-gray-500">
            "Loading Portal..."
        </div>
    }
}
