//! Page View-Models
//!
//! Each page is a small state machine fed by one or more gateway calls.
//! Views own no rendering: the CLI renders them as text and the browser
//! front-end binds them to Leptos signals.
//!
//! - [`nav`]: navigation shell and destinations
//! - [`dashboard`]: joint stats + analysis fetch
//! - [`courses`]: course list with a single selection
//! - [`daily_test`]: quiz grading and result delivery
//! - [`rewards`]: puzzle progress and badges
//! - [`scope`]: cancellation bound to a view's mount lifetime

pub mod courses;
pub mod daily_test;
pub mod dashboard;
pub mod nav;
pub mod rewards;
pub mod scope;

pub use courses::{CourseDetail, CourseError, CourseListing, CoursesView};
pub use daily_test::{DailyTestView, Delivery, QuizError, QuizPhase};
pub use dashboard::{DashboardSnapshot, DashboardView};
pub use nav::{Destination, NavigationShell};
pub use rewards::{RewardsPage, RewardsView};
pub use scope::{Cancelled, MountScope};

use serde::Serialize;

/// Loading lifecycle of a fetched page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
