//! Learning-event ingest
//!
//! Validates a [`LearningEvent`] against the backend's constraints and posts
//! it to the generic events endpoint. A failed post is reported, never
//! retried, and leaves every view untouched.

use crate::api::PortalApi;
use crate::models::{EventError, LearningEvent};
use crate::views::Delivery;

/// Validate `event` and post it to `/events`
///
/// Invalid events are rejected before anything is sent.
pub async fn log_event<A: PortalApi + ?Sized>(
    api: &A,
    event: &LearningEvent,
) -> Result<Delivery, EventError> {
    event.validate()?;

    let body = match serde_json::to_value(event) {
        Ok(body) => body,
        Err(e) => return Ok(Delivery::Failed(e.to_string())),
    };

    match api.ingest_event(&body).await {
        Ok(()) => {
            tracing::info!(student_id = %event.student_id, topic = %event.topic, "Learning event logged");
            Ok(Delivery::Acked)
        }
        Err(e) => {
            tracing::warn!(student_id = %event.student_id, error = %e, "Event was not delivered");
            Ok(Delivery::Failed(e.to_string()))
        }
    }
}
