//! Navigation Component
//!
//! Sidebar with the brand, page links and the signed-in student.

use leptos::*;
use leptos_router::*;

use edportal::views::nav::{BRAND, BRAND_TAGLINE};
use edportal::views::{Destination, NavigationShell};

use crate::state::session::sign_out;
use crate::state::use_portal;

/// Navigation sidebar component
#[component]
pub fn Nav() -> impl IntoView {
    let portal = use_portal();
    let shell = NavigationShell::new(&portal.student);
    let initial = shell.avatar_initial().map(String::from).unwrap_or_default();
    let name = shell.student_name().to_string();

    view! {
        <aside class="w-64 min-h-screen bg-gray-800 border-r border-gray-700 flex flex-col">
            <div class="px-6 py-6">
                <h2 class="text-xl font-bold text-primary-400">{BRAND}</h2>
                <p class="text-sm text-gray-400">{BRAND_TAGLINE}</p>
            </div>

            <nav class="flex-1 px-3 space-y-1">
                {Destination::ALL
                    .into_iter()
                    .map(|destination| view! { <NavLink destination=destination /> })
                    .collect_view()}
            </nav>

            <div class="px-6 py-4 border-t border-gray-700 flex items-center space-x-3">
                <div class="w-10 h-10 rounded-full bg-primary-600 flex items-center justify-center font-bold">
                    {initial}
                </div>
                <div class="flex-1">
                    <p class="font-medium">{name}</p>
                    <p class="text-xs text-gray-400">"Student"</p>
                </div>
                <button
                    class="text-gray-400 hover:text-white"
                    title="Sign out"
                    on:click=move |_| sign_out()
                >
                    "⎋"
                </button>
            </div>
        </aside>
    }
}

/// Individual navigation link
#[component]
fn NavLink(destination: Destination) -> impl IntoView {
    view! {
        <A
            href=destination.path()
            exact=true
            class="flex items-center space-x-3 px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span>{destination.icon()}</span>
            <span>{destination.label()}</span>
        </A>
    }
}
