//! App Root Component
//!
//! Bootstraps the session, then mounts the router inside the navigation
//! shell. Nothing but the loading screen renders until the student resolves.

use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::api::BrowserGateway;
use crate::components::{Nav, PortalLoading};
use crate::pages::{Courses, DailyTest, Dashboard, Rewards};
use crate::state::provide_portal;
use crate::state::session::bootstrap_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let api = Rc::new(BrowserGateway::from_storage());
    let session = bootstrap_session(api.clone());

    move || match session.with(|s| s.student().cloned()) {
        None => view! { <PortalLoading /> }.into_view(),
        Some(student) => {
            provide_portal(api.clone(), student);
            view! { <Shell /> }.into_view()
        }
    }
}

/// Navigation shell around the routed pages
#[component]
fn Shell() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex">
                <Nav />

                <main class="flex-1 px-8 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/courses" view=Courses />
                        <Route path="/test" view=DailyTest />
                        <Route path="/rewards" view=Rewards />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
