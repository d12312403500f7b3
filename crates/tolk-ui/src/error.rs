use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tolk_types::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl UiError {
    fn status(&self) -> StatusCode {
        match self {
            UiError::Session(SessionError::UnknownSession(_)) => StatusCode::NOT_FOUND,
            UiError::Session(SessionError::SessionLimit(_)) => StatusCode::SERVICE_UNAVAILABLE,
            UiError::Session(SessionError::Busy(_)) => StatusCode::TOO_MANY_REQUESTS,
            UiError::Session(SessionError::ControllerGone) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for UiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("Request failed: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
