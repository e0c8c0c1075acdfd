//! Navigation Shell
//!
//! Fixed set of destinations plus the signed-in student's display name.

use serde::Serialize;

use crate::models::Student;
use crate::session::Session;

/// Portal brand shown above the navigation
pub const BRAND: &str = "Build2Break";
pub const BRAND_TAGLINE: &str = "EdTech Portal";

/// A page the shell can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Dashboard,
    Courses,
    DailyTest,
    Rewards,
}

impl Destination {
    /// All destinations in navigation order
    pub const ALL: [Destination; 4] = [
        Destination::Dashboard,
        Destination::Courses,
        Destination::DailyTest,
        Destination::Rewards,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Destination::Dashboard => "/",
            Destination::Courses => "/courses",
            Destination::DailyTest => "/test",
            Destination::Rewards => "/rewards",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::Courses => "My Courses",
            Destination::DailyTest => "Daily Test",
            Destination::Rewards => "Rewards",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Destination::Dashboard => "📊",
            Destination::Courses => "📚",
            Destination::DailyTest => "✏️",
            Destination::Rewards => "🏆",
        }
    }

    /// Resolve a route path; unknown paths have no destination
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|d| d.path().trim_end_matches('/') == trimmed)
    }
}

/// One entry of the rendered navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub destination: Destination,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Persistent navigation around the active page
#[derive(Debug, Clone)]
pub struct NavigationShell {
    student_name: String,
    initial: Option<char>,
    active: Destination,
}

impl NavigationShell {
    /// Mount the shell for a resolved student, starting on the dashboard
    pub fn new(student: &Student) -> Self {
        Self {
            student_name: student.name.clone(),
            initial: student.initial(),
            active: Destination::Dashboard,
        }
    }

    pub fn student_name(&self) -> &str {
        &self.student_name
    }

    pub fn avatar_initial(&self) -> Option<char> {
        self.initial
    }

    pub fn active(&self) -> Destination {
        self.active
    }

    pub fn is_active(&self, destination: Destination) -> bool {
        self.active == destination
    }

    pub fn navigate(&mut self, to: Destination) {
        tracing::debug!(from = ?self.active, to = ?to, "Navigating");
        self.active = to;
    }

    pub fn items(&self) -> Vec<NavItem> {
        Destination::ALL
            .into_iter()
            .map(|destination| NavItem {
                destination,
                label: destination.label(),
                path: destination.path(),
                active: self.is_active(destination),
            })
            .collect()
    }

    /// Sign out: the shell is dropped and the session reset
    pub fn sign_out(self, session: &mut Session) {
        session.sign_out();
    }
}
