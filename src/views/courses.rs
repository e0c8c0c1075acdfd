//! Courses View
//!
//! Course list plus a single selected course. The list fetch resolves to a
//! tagged [`CourseListing`] so that a failed fetch is never mistaken for a
//! student without courses.

use serde::Serialize;
use thiserror::Error;

use super::MountScope;
use crate::api::{ApiResult, PortalApi};
use crate::models::Course;

pub const NO_SELECTION: &str = "Select a course to view details";
pub const NO_CONTENT: &str = "No content available yet.";

/// Result of the course list fetch
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum CourseListing {
    #[default]
    Loading,
    Loaded(Vec<Course>),
    Empty,
    Failed(String),
}

impl CourseListing {
    pub fn from_result(result: ApiResult<Vec<Course>>) -> Self {
        match result {
            Ok(courses) if courses.is_empty() => CourseListing::Empty,
            Ok(courses) => CourseListing::Loaded(courses),
            Err(e) => CourseListing::Failed(e.to_string()),
        }
    }

    /// Courses to list; empty unless loaded
    pub fn courses(&self) -> &[Course] {
        match self {
            CourseListing::Loaded(courses) => courses,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CourseListing::Failed(_))
    }
}

/// Course selection errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CourseError {
    #[error("Course {0} is not in the current listing")]
    UnknownCourse(i64),
}

/// Kind of a content item, for tagging in the detail pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Quiz,
    Other(String),
}

impl ContentKind {
    pub fn label(&self) -> String {
        match self {
            ContentKind::Quiz => "QUIZ".to_string(),
            ContentKind::Other(kind) => kind.to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSlot {
    pub day: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    pub title: String,
    pub kind: ContentKind,
    pub due_date: Option<String>,
}

/// Detail pane for the selected course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetail {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub faculty_name: String,
    pub schedule: Vec<ScheduleSlot>,
    pub content: Vec<ContentItem>,
}

impl From<&Course> for CourseDetail {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            faculty_name: course.faculty_name.clone(),
            schedule: course
                .schedule
                .iter()
                .map(|(day, time)| ScheduleSlot {
                    day: day.clone(),
                    time: time.clone(),
                })
                .collect(),
            content: course
                .content
                .iter()
                .map(|item| ContentItem {
                    title: item.title.clone(),
                    kind: if item.is_quiz() {
                        ContentKind::Quiz
                    } else {
                        ContentKind::Other(item.content_type.clone())
                    },
                    due_date: item.due_date().map(str::to_string),
                })
                .collect(),
        }
    }
}

/// Fetch the course list for a student
pub async fn fetch_courses<A: PortalApi + ?Sized>(api: &A, student_id: &str) -> CourseListing {
    let listing = CourseListing::from_result(api.courses(student_id).await);
    if let CourseListing::Failed(error) = &listing {
        tracing::warn!(student_id, %error, "Course list fetch failed");
    }
    listing
}

/// Courses page state
#[derive(Debug, Clone)]
pub struct CoursesView {
    student_id: String,
    listing: CourseListing,
    selected: Option<i64>,
}

impl CoursesView {
    pub fn new(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            listing: CourseListing::Loading,
            selected: None,
        }
    }

    pub fn listing(&self) -> &CourseListing {
        &self.listing
    }

    pub fn courses(&self) -> &[Course] {
        self.listing.courses()
    }

    /// Apply a fetched listing, keeping the selection only if still listed
    pub fn apply(&mut self, listing: CourseListing) {
        self.listing = listing;
        if let Some(id) = self.selected {
            if !self.courses().iter().any(|c| c.id == id) {
                self.selected = None;
            }
        }
    }

    pub async fn load<A: PortalApi + ?Sized>(&mut self, api: &A, scope: &MountScope) -> &CourseListing {
        let outcome = scope.run(fetch_courses(api, &self.student_id)).await;
        match outcome {
            Ok(listing) => self.apply(listing),
            Err(_) => tracing::debug!("Discarding course list for unmounted view"),
        }
        &self.listing
    }

    /// Select a course by id. Selecting the selected course is a no-op.
    pub fn select(&mut self, course_id: i64) -> Result<&Course, CourseError> {
        let course = self
            .listing
            .courses()
            .iter()
            .find(|c| c.id == course_id)
            .ok_or(CourseError::UnknownCourse(course_id))?;
        self.selected = Some(course_id);
        Ok(course)
    }

    pub fn selected(&self) -> Option<&Course> {
        let id = self.selected?;
        self.courses().iter().find(|c| c.id == id)
    }

    pub fn is_selected(&self, course_id: i64) -> bool {
        self.selected == Some(course_id)
    }

    pub fn detail(&self) -> Option<CourseDetail> {
        self.selected().map(CourseDetail::from)
    }
}
