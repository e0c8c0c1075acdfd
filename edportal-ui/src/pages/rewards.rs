//! Rewards Page
//!
//! Puzzle progress toward the next reward and unlocked badges.

use leptos::*;

use edportal::views::rewards::NO_BADGES;
use edportal::views::{LoadState, RewardsPage, RewardsView};

use crate::components::Loading;
use crate::state::{use_mount_scope, use_portal};

/// Rewards page component: fetches the stats the view renders
#[component]
pub fn Rewards() -> impl IntoView {
    let portal = use_portal();
    let scope = use_mount_scope();
    let state = create_rw_signal(LoadState::<RewardsView>::Loading);

    spawn_local(async move {
        let mut page = RewardsPage::new(&portal.student_id());
        let loaded = page.load(portal.api.as_ref(), &scope).await.clone();
        if scope.is_mounted() {
            state.set(loaded);
        }
    });

    move || match state.get() {
        LoadState::Loading => view! { <Loading /> }.into_view(),
        LoadState::Failed(message) => view! {
            <div class="text-red-400">{format!("Could not load rewards: {}", message)}</div>
        }.into_view(),
        LoadState::Ready(rewards) => view! { <RewardsPanel rewards=rewards /> }.into_view(),
    }
}

#[component]
fn RewardsPanel(rewards: RewardsView) -> impl IntoView {
    let banner = rewards.completion_banner();
    let label = rewards.progress_label();
    let percent = rewards.percent();

    view! {
        <div class="space-y-8">
            <header>
                <h1 class="text-3xl font-bold">"Rewards & Achievements"</h1>
                <p class="text-gray-400 mt-1">"Collect pieces by maintaining your streak!"</p>
            </header>

            <div class="grid md:grid-cols-2 gap-6">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Mystery Puzzle"</h2>
                    <div class="grid grid-cols-6 gap-1">
                        {rewards
                            .cells()
                            .into_iter()
                            .map(|cell| view! {
                                <div class=if cell.filled {
                                    "aspect-square rounded bg-primary-500"
                                } else {
                                    "aspect-square rounded bg-gray-700"
                                } />
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-4">
                        <div class="h-2 bg-gray-700 rounded">
                            <div class="h-2 bg-primary-500 rounded" style=format!("width: {:.0}%", percent) />
                        </div>
                        <p class="text-sm text-gray-400 mt-2">{label}</p>
                    </div>
                    {banner.map(|text| view! {
                        <p class="mt-4 text-center font-bold text-green-400">{text}</p>
                    })}
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Your Collection"</h2>
                    {if rewards.has_badges() {
                        rewards
                            .badges
                            .into_iter()
                            .map(|badge| view! {
                                <div class="flex items-center space-x-3 py-2">
                                    <span class="text-2xl">"🏅"</span>
                                    <span>{badge}</span>
                                </div>
                            })
                            .collect_view()
                    } else {
                        view! { <p class="text-gray-400">{NO_BADGES}</p> }.into_view()
                    }}
                </section>
            </div>
        </div>
    }
}
