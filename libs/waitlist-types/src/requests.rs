use serde::{Deserialize, Serialize};

/// Body of `POST /api/waitlist`.
///
/// Deserialization fails when `email` is missing or is not a JSON string,
/// which the API reports as an invalid email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinWaitlistRequest {
    pub email: String,
}
