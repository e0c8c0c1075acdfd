//! Browser Gateway
//!
//! Fetch-based implementation of [`PortalApi`] for the WASM front-end.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use edportal::api::{
    endpoints, error_message, normalize_base_url, ApiError, ApiResult, PortalApi, DEFAULT_API_BASE,
};
use edportal::models::{Analysis, Course, DailyQuiz, DashboardStats, LearningEvent, Student};

/// Local storage key holding an API base URL override
pub const API_URL_KEY: &str = "edportal_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    normalize_base_url(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Gateway bound to one base URL
#[derive(Debug, Clone)]
pub struct BrowserGateway {
    base_url: String,
}

impl BrowserGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    /// Gateway for the configured base URL
    pub fn from_storage() -> Self {
        Self::new(&get_api_base())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Request::get(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = ensure_success(response).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<()> {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status,
        message: error_message(&text),
    })
}

#[async_trait(?Send)]
impl PortalApi for BrowserGateway {
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
