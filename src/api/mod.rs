//! Portal API Gateway
//!
//! The contract between the views and the backend. Every view talks to the
//! backend through [`PortalApi`], so the native reqwest client, the browser
//! client and test doubles are interchangeable.
//!
//! ## Endpoints
//!
//! | Operation           | Method & Path                     |
//! |---------------------|-----------------------------------|
//! | Resolve identity    | `GET /auth/student/{roll_no}`     |
//! | Dashboard stats     | `GET /student/{student_id}/dashboard` |
//! | Analysis            | `GET /analysis/{student_id}`      |
//! | Courses             | `GET /courses/{student_id}`       |
//! | Daily test          | `GET /test/daily`                 |
//! | Submit test result  | `POST /test/submit`               |
//! | Ingest event        | `POST /events`                    |
//!
//! There is no retry, timeout override, caching or auth header: a failed
//! round trip is returned to the calling view as an [`ApiError`].

#[cfg(feature = "native")]
pub mod client;
mod error;

#[cfg(feature = "native")]
pub use client::HttpGateway;
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::models::{Analysis, Course, DailyQuiz, DashboardStats, LearningEvent, Student};

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Roll number used for the demo session
pub const DEMO_ROLL_NO: &str = "123";

/// Backend operations used by the portal views
///
/// Futures are not required to be `Send` so that the same trait can be
/// implemented on top of the browser's fetch API.
#[async_trait(?Send)]
pub trait PortalApi {
    /// Look up a student by roll number
    async fn login_student(&self, roll_no: &str) -> ApiResult<Student>;

    /// Aggregate statistics for the dashboard and rewards pages
    async fn dashboard_stats(&self, student_id: &str) -> ApiResult<DashboardStats>;

    /// Strong/weak topic analysis
    async fn analysis(&self, student_id: &str) -> ApiResult<Analysis>;

    /// Courses the student is enrolled in
    async fn courses(&self, student_id: &str) -> ApiResult<Vec<Course>>;

    /// Today's quiz question
    async fn daily_test(&self) -> ApiResult<DailyQuiz>;

    /// Post a graded quiz result. The response body is not consumed.
    async fn submit_test(&self, event: &LearningEvent) -> ApiResult<()>;

    /// Post an arbitrary learning event. The response body is not consumed.
    async fn ingest_event(&self, event: &serde_json::Value) -> ApiResult<()>;
}

/// Endpoint paths, relative to the base URL
pub mod endpoints {
    use urlencoding::encode;

    pub const DAILY_TEST: &str = "/test/daily";
    pub const SUBMIT_TEST: &str = "/test/submit";
    pub const EVENTS: &str = "/events";

    pub fn student(roll_no: &str) -> String {
        format!("/auth/student/{}", encode(roll_no))
    }

    pub fn dashboard(student_id: &str) -> String {
        format!("/student/{}/dashboard", encode(student_id))
    }

    pub fn analysis(student_id: &str) -> String {
        format!("/analysis/{}", encode(student_id))
    }

    pub fn courses(student_id: &str) -> String {
        format!("/courses/{}", encode(student_id))
    }
}

/// Normalize a base URL: trim whitespace and trailing slashes
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Extract a readable message from an error response body
///
/// The backend reports errors as `{"detail": "..."}`; anything else is
/// passed through as-is.
pub fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct Detail {
        detail: serde_json::Value,
    }

    match serde_json::from_str::<Detail>(body) {
        Ok(Detail { detail: serde_json::Value::String(s) }) => s,
        Ok(Detail { detail }) => detail.to_string(),
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(endpoints::student("123"), "/auth/student/123");
        assert_eq!(endpoints::dashboard("123"), "/student/123/dashboard");
        assert_eq!(endpoints::analysis("123"), "/analysis/123");
        assert_eq!(endpoints::courses("123"), "/courses/123");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        assert_eq!(endpoints::student("a/b c"), "/auth/student/a%2Fb%20c");
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
        assert_eq!(normalize_base_url(" http://api.local// "), "http://api.local");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(r#"{"detail": "Student not found"}"#), "Student not found");
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(""), "Unknown error");
    }
}
