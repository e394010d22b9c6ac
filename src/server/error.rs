use crate::error::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Every pipeline failure is reported to clients as 404 with a `detail` message.
#[derive(Debug)]
pub struct HttpError(Error);

impl From<Error> for HttpError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match &self.0 {
            Error::TranscriptUnavailable { video_id, reason } => {
                tracing::warn!(video_id, reason, "Transcript unavailable");
            }
            Error::GenerationFailed { reason } => {
                tracing::error!(reason, "Post generation failed");
            }
            other => tracing::error!(error = %other, "Request failed"),
        }

        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "detail": self.0.to_string(),
            })),
        )
            .into_response()
    }
}
