use crate::app_error::AppError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use waitlist_types::{ErrorResponse, INVALID_EMAIL, SERVER_ERROR};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidEmail => error_resp(StatusCode::BAD_REQUEST, INVALID_EMAIL),
            AppError::Database(cause) => {
                // Operators get the cause, callers only the generic message.
                tracing::error!(error = %cause, "Waitlist error");
                error_resp(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR)
            }
        }
    }
}

/// A body that is not a JSON object with a string `email` is an invalid email.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Rejected waitlist payload");
        AppError::InvalidEmail
    }
}

fn error_resp(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
