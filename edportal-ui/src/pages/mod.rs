//! Page Components
//!
//! Top-level page views for each route.

pub mod courses;
pub mod dashboard;
pub mod rewards;

pub use courses::Courses;
pub use daily_test::DailyTest;
pub use dashboard::Dashboard;
pub use rewards::Rewards;
