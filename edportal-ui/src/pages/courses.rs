//! Courses Page
//!
//! Course list with a detail pane for the selected course.

use leptos::*;

use edportal::views::courses::{CourseDetail, NO_CONTENT, NO_SELECTION};
use edportal::views::{CourseListing, CoursesView};

use crate::components::Loading;
use crate::state::{use_mount_scope, use_portal};

/// Courses page component
#[component]
pub fn Courses() -> impl IntoView {
    let portal = use_portal();
    let scope = use_mount_scope();
    let courses = create_rw_signal(CoursesView::new(&portal.student.id));

    spawn_local(async move {
        let mut view = CoursesView::new(&portal.student_id());
        view.load(portal.api.as_ref(), &scope).await;
        if scope.is_mounted() {
            courses.set(view);
        }
    });

    let on_select = move |id: i64| {
        courses.update(|view| {
            if let Err(e) = view.select(id) {
                web_sys::console::warn_1(&e.to_string().into());
            }
        });
    };

    view! {
        <div class="space-y-8">
            <header>
                <h1 class="text-3xl font-bold">"My Courses"</h1>
                <p class="text-gray-400 mt-1">"Manage your learning schedule and faculty interactions."</p>
            </header>

            <div class="grid md:grid-cols-3 gap-6">
                <section class="space-y-3">
                    {move || courses.with(|view| match view.listing() {
                        CourseListing::Loading => view! { <Loading /> }.into_view(),
                        CourseListing::Failed(message) => view! {
                            <p class="text-red-400">{format!("Could not load courses: {}", message)}</p>
                        }.into_view(),
                        CourseListing::Empty => view! {
                            <p class="text-gray-400">"You are not enrolled in any courses."</p>
                        }.into_view(),
                        CourseListing::Loaded(list) => list
                            .iter()
                            .map(|course| {
                                let id = course.id;
                                let selected = view.is_selected(id);
                                view! {
                                    <button
                                        class=if selected {
                                            "w-full text-left p-4 rounded-lg border border-primary-500 bg-gray-700"
                                        } else {
                                            "w-full text-left p-4 rounded-lg border border-gray-700 bg-gray-800 hover:bg-gray-700"
                                        }
                                        on:click=move |_| on_select(id)
                                    >
                                        <h3 class="font-semibold">{course.title.clone()}</h3>
                                        <p class="text-sm text-gray-400">{course.faculty_name.clone()}</p>
                                    </button>
                                }
                            })
                            .collect_view(),
                    })}
                </section>

                <section class="md:col-span-2 bg-gray-800 rounded-xl p-6">
                    {move || match courses.with(|view| view.detail()) {
                        Some(detail) => view! { <Detail detail=detail /> }.into_view(),
                        None => view! {
                            <p class="text-gray-400 text-center py-12">{NO_SELECTION}</p>
                        }.into_view(),
                    }}
                </section>
            </div>
        </div>
    }
}

#[component]
fn Detail(detail: CourseDetail) -> impl IntoView {
    let has_content = !detail.content.is_empty();

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold">{detail.title}</h2>
                <p class="text-gray-400">{detail.description}</p>
            </div>

            <div class="grid md:grid-cols-2 gap-4">
                <div>
                    <span class="font-semibold">"Faculty"</span>
                    <p>{detail.faculty_name}</p>
                </div>
                <div>
                    <span class="font-semibold">"Schedule"</span>
                    {detail
                        .schedule
                        .into_iter()
                        .map(|slot| view! { <p>{format!("{}: {}", slot.day, slot.time)}</p> })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 class="text-lg font-semibold mb-2">"Course Content"</h3>
                {if has_content {
                    detail
                        .content
                        .into_iter()
                        .map(|item| view! {
                            <div class="flex items-center justify-between py-2 border-b border-gray-700">
                                <span>{item.title}</span>
                                <span class="text-xs text-gray-400">
                                    {item.kind.label()}
                                    {item.due_date.map(|due| format!(" · Due {}", due))}
                                </span>
                            </div>
                        })
                        .collect_view()
                } else {
                    view! { <p class="text-gray-400">{NO_CONTENT}</p> }.into_view()
                }}
            </div>
        </div>
    }
}
