use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use waitlist_types::{ADDED_TO_WAITLIST, JoinWaitlistRequest, MessageResponse};

use crate::{adapters::http::app_state::AppState, app_error::AppResult};

/// POST /api/waitlist
/// Records the email on the waitlist. The body is decoded as JSON whatever
/// the content type; decode failures (missing field, non-string value,
/// unparseable body) are reported as an invalid email.
async fn join_waitlist(
    State(app_state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = Json::<JoinWaitlistRequest>::from_bytes(&body)?;

    app_state
        .waitlist_use_cases
        .join_waitlist(&payload.email)
        .await?;

    Ok((StatusCode::OK, Json(MessageResponse::new(ADDED_TO_WAITLIST))))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/waitlist", post(join_waitlist))
}
