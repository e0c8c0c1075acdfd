//! UI Components
//!
//! Reusable Leptos components for the portal pages.

pub mod chart;
pub mod loading;
pub mod nav;

pub use chart::ProgressChart;
pub use loading::{Loading, PortalLoading};
pub use nav::Nav;
