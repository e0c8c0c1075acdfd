//! Dashboard Page
//!
//! Streak, confidence, topic analysis, daily progress and activity mix.

use leptos::*;

use edportal::views::dashboard::{NO_STRONG_TOPICS, NO_WEAK_TOPICS};
use edportal::views::{DashboardSnapshot, DashboardView, LoadState};

use crate::components::{Loading, ProgressChart};
use crate::state::{use_mount_scope, use_portal};

const SLICE_COLORS: [&str; 4] = ["#8b5cf6", "#10b981", "#f59e0b", "#ef4444"];

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let portal = use_portal();
    let scope = use_mount_scope();
    let state = create_rw_signal(LoadState::<DashboardSnapshot>::Loading);

    spawn_local(async move {
        let mut view = DashboardView::new(&portal.student_id());
        let loaded = view.load(portal.api.as_ref(), &scope).await.clone();
        if scope.is_mounted() {
            state.set(loaded);
        }
    });

    move || match state.get() {
        LoadState::Loading => view! { <Loading label="Loading analytics..." /> }.into_view(),
        LoadState::Failed(message) => view! { <div class="text-red-400">{message}</div> }.into_view(),
        LoadState::Ready(snapshot) => view! { <Overview snapshot=snapshot /> }.into_view(),
    }
}

#[component]
fn Overview(snapshot: DashboardSnapshot) -> impl IntoView {
    let status = snapshot.streak_status();
    let active = snapshot.streak.is_active;

    view! {
        <div class="space-y-8">
            <header>
                <h1 class="text-3xl font-bold">"Performance Overview"</h1>
                <p class="text-gray-400 mt-1">{format!("Good Afternoon, {}", snapshot.student_name)}</p>
            </header>

            <div class="grid md:grid-cols-3 gap-6">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"Current Streak"</h2>
                    <div class="text-4xl font-bold">
                        {snapshot.streak.current_streak} <span class="text-base">" days"</span>
                    </div>
                    <div class=if active { "text-green-400" } else { "text-gray-400" }>{status}</div>
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"Confidence"</h2>
                    <span class=format!("confidence-badge conf-{}", snapshot.confidence)>
                        {snapshot.confidence.clone()}
                    </span>
                    <p class="text-sm mt-4">{snapshot.confidence_reason.clone().unwrap_or_default()}</p>
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-lg font-semibold mb-4">"AI Insights"</h2>
                    <TopicList title="Strong Areas:" topics=snapshot.strong_topics.clone() empty=NO_STRONG_TOPICS />
                    <TopicList title="Focus Needed:" topics=snapshot.weak_topics.clone() empty=NO_WEAK_TOPICS />
                </section>
            </div>

            <div class="grid md:grid-cols-3 gap-6">
                <section class="md:col-span-2 bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Daily Progress"</h2>
                    <ProgressChart points=snapshot.chart.clone() />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Activity Mix"</h2>
                    <ul class="space-y-2">
                        {snapshot
                            .activity_mix
                            .iter()
                            .enumerate()
                            .map(|(idx, share)| {
                                let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
                                view! {
                                    <li class="flex items-center space-x-2">
                                        <span
                                            class="w-3 h-3 rounded-full"
                                            style=format!("background-color: {}", color)
                                        />
                                        <span class="capitalize flex-1">{share.activity_type.clone()}</span>
                                        <span class="text-gray-400">{format!("{} ({:.0}%)", share.count, share.percent)}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}

#[component]
fn TopicList(title: &'static str, topics: Vec<String>, empty: &'static str) -> impl IntoView {
    view! {
        <div class="mb-3 text-sm">
            <strong>{title}</strong>
            <div class="flex flex-wrap gap-2 mt-1">
                {if topics.is_empty() {
                    view! { <span class="text-gray-400">{empty}</span> }.into_view()
                } else {
                    topics
                        .into_iter()
                        .map(|topic| view! { <span class="bg-gray-700 px-2 rounded">{topic}</span> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
