//! Portal Session Context
//!
//! The resolved student and the gateway are handed to the pages through an
//! explicit context, provided once the session bootstrap succeeds.

use leptos::*;
use std::rc::Rc;

use edportal::models::Student;
use edportal::session::Session;
use edportal::views::MountScope;

use crate::api::BrowserGateway;

/// Everything a mounted page needs from the session
#[derive(Clone)]
pub struct Portal {
    pub api: Rc<BrowserGateway>,
    pub student: Student,
}

impl Portal {
    pub fn student_id(&self) -> String {
        self.student.id.clone()
    }
}

pub fn provide_portal(api: Rc<BrowserGateway>, student: Student) {
    provide_context(Portal { api, student });
}

pub fn use_portal() -> Portal {
    use_context::<Portal>().expect("Portal context not found")
}

/// Bootstrap the session and publish it once resolved
///
/// A failed lookup is reported on the console and the signal keeps the
/// session resolving, so the app stays on its loading screen.
pub fn bootstrap_session(api: Rc<BrowserGateway>) -> ReadSignal<Session> {
    let (session, set_session) = create_signal(Session::demo());

    spawn_local(async move {
        let mut resolving = Session::demo();
        if resolving.bootstrap(api.as_ref()).await.is_none() {
            let error = resolving.last_error().unwrap_or("unknown error");
            web_sys::console::error_1(&format!("Failed to resolve student: {}", error).into());
        }
        set_session.set(resolving);
    });

    session
}

/// Scope tied to the current component: unmounting aborts its requests
pub fn use_mount_scope() -> MountScope {
    let scope = MountScope::new();
    let on_unmount = scope.clone();
    on_cleanup(move || on_unmount.unmount());
    scope
}

/// Discard the session and start over from a fresh page load
pub fn sign_out() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            web_sys::console::error_1(&e);
        }
    }
}
