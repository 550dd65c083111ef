//! Waitlist HTTP client.

use url::Url;
use waitlist_types::{JoinWaitlistRequest, WAITLIST_PATH, WaitlistReply};

use crate::error::ClientError;

/// Configuration for the waitlist client.
#[derive(Debug, Clone)]
pub struct WaitlistConfig {
    /// Origin serving the API (e.g., "https://zerocad.example")
    pub base_url: String,
}

/// Sends signup requests to the waitlist endpoint.
pub struct WaitlistClient {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl WaitlistClient {
    /// Create a new client.
    ///
    /// # Returns
    /// A configured `WaitlistClient` or an error if `base_url` is empty or
    /// not an absolute URL.
    pub fn new(config: WaitlistConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ClientError::Config("base_url is required".into()));
        }

        let endpoint = Url::parse(&format!("{base_url}{WAITLIST_PATH}"))
            .map_err(|e| ClientError::Config(format!("invalid base_url: {e}")))?;

        Ok(Self {
            endpoint,
            http_client: reqwest::Client::new(),
        })
    }

    /// Full URL of the signup endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submit an email to the waitlist.
    ///
    /// The reply body is decoded whatever the status code; callers branch on
    /// which of `message` / `error` is present.
    pub async fn join(&self, email: &str) -> Result<WaitlistReply, ClientError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&JoinWaitlistRequest {
                email: email.to_string(),
            })
            .send()
            .await?;

        let reply = response.json::<WaitlistReply>().await?;
        Ok(reply)
    }
}
