//! # EdPortal
//!
//! Client-side core of a student learning portal. The backend owns every
//! business rule (streaks, confidence, analysis, rewards); this crate fetches
//! its data over HTTP and drives the page state machines that render it.
//!
//! ## Modules
//!
//! - [`api`]: backend gateway trait, endpoints and the reqwest client
//! - [`models`]: wire data model
//! - [`session`]: student identity bootstrap and sign-out
//! - [`views`]: dashboard, courses, daily test and rewards view-models
//! - [`events`]: validated learning-event ingest
//! - [`render`]: terminal rendering (feature `native`)
//! - [`config`], [`logging`]: configuration and tracing setup (feature `native`)
//!
//! Without the `native` feature the crate builds for `wasm32` and supplies
//! the view-models to the browser front-end.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edportal::api::HttpGateway;
//! use edportal::session::Session;
//! use edportal::views::{DashboardView, MountScope};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpGateway::new("http://localhost:8000")?;
//!
//!     let mut session = Session::demo();
//!     let student = session.bootstrap(&api).await.cloned().ok_or("backend unavailable")?;
//!
//!     let scope = MountScope::new();
//!     let mut dashboard = DashboardView::new(&student.id);
//!     if let Some(snapshot) = dashboard.load(&api, &scope).await.ready() {
//!         println!("{}: {} day streak", snapshot.student_name, snapshot.streak.current_streak);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod events;
pub mod models;
pub mod session;
pub mod views;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod render;

#[cfg(test)]
mod testing;

pub use api::{ApiError, ApiResult, PortalApi};

#[cfg(feature = "native")]
pub use api::HttpGateway;

pub use models::{
    ActivityType, Analysis, Course, DailyQuiz, DashboardStats, EventError, LearningEvent,
    Student,
};

pub use events::log_event;
pub use session::{Session, SessionPhase};

pub use views::{
    Cancelled, CourseListing, CoursesView, DailyTestView, DashboardSnapshot, DashboardView,
    Delivery, Destination, LoadState, MountScope, NavigationShell, QuizError, QuizPhase,
    RewardsPage, RewardsView,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
