//! Portal REST API Client
//!
//! reqwest implementation of [`PortalApi`] bound to a single base URL.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{endpoints, error_message, normalize_base_url, ApiError, ApiResult, PortalApi};
use crate::models::{Analysis, Course, DailyQuiz, DashboardStats, LearningEvent, Student};

/// Shared HTTP client for every portal view
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway for the given base URL (e.g. "http://localhost:8000")
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        ensure_success(response).await?;

        Ok(())
    }
}

/// Turn a non-success response into [`ApiError::Status`]
async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&text),
    })
}

#[async_trait(?Send)]
impl PortalApi for HttpGateway {
    async fn login_student(&self, roll_no: &str) -> ApiResult<Student> {
        self.get_json(&endpoints::student(roll_no)).await
    }

    async fn dashboard_stats(&self, student_id: &str) -> ApiResult<DashboardStats> {
        self.get_json(&endpoints::dashboard(student_id)).await
    }

    async fn analysis(&self, student_id: &str) -> ApiResult<Analysis> {
        self.get_json(&endpoints::analysis(student_id)).await
    }

    async fn courses(&self, student_id: &str) -> ApiResult<Vec<Course>> {
        self.get_json(&endpoints::courses(student_id)).await
    }

    async fn daily_test(&self) -> ApiResult<DailyQuiz> {
        self.get_json(endpoints::DAILY_TEST).await
    }

    async fn submit_test(&self, event: &LearningEvent) -> ApiResult<()> {
        self.post_json(endpoints::SUBMIT_TEST, event).await
    }

    async fn ingest_event(&self, event: &serde_json::Value) -> ApiResult<()> {
        self.post_json(endpoints::EVENTS, event).await
    }
}
