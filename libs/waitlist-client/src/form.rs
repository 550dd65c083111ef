//! Signup form state and click handling.

use std::time::{Duration, Instant};

use waitlist_types::WaitlistReply;

use crate::client::WaitlistClient;
use crate::error::ClientError;

/// Button label at rest.
pub const BUTTON_LABEL: &str = "Join the Waitlist";

/// Button label right after a successful signup.
pub const CONFIRMATION_LABEL: &str = "Thank You!";

/// How long the confirmation label stays on the button.
pub const CONFIRMATION_DURATION: Duration = Duration::from_secs(2);

/// Alert shown when the button is clicked with an empty field.
pub const EMPTY_EMAIL_ALERT: &str = "Please enter an email address.";

/// Alert shown when the request could not complete.
pub const GENERIC_ERROR_ALERT: &str = "An error occurred. Please try again.";

/// What the UI should surface after a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Signup accepted: the field was cleared and the button shows the confirmation.
    Confirmed,
    /// Show this message to the user.
    Alert(String),
    /// The reply carried neither a message nor an error.
    Unchanged,
}

#[derive(Debug, Default)]
pub struct SignupForm {
    email: String,
    confirmed_at: Option<Instant>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Label shown on the button at `now`. The confirmation reverts on its own
    /// once `CONFIRMATION_DURATION` has passed.
    pub fn button_label_at(&self, now: Instant) -> &'static str {
        match self.confirmed_at {
            Some(at) if now.saturating_duration_since(at) < CONFIRMATION_DURATION => {
                CONFIRMATION_LABEL
            }
            _ => BUTTON_LABEL,
        }
    }

    pub fn button_label(&self) -> &'static str {
        self.button_label_at(Instant::now())
    }

    /// Handle a click on the join button.
    ///
    /// An empty field short-circuits with an alert and sends nothing.
    /// Otherwise exactly one request is sent.
    pub async fn submit(&mut self, client: &WaitlistClient) -> FormOutcome {
        if self.email.is_empty() {
            return FormOutcome::Alert(EMPTY_EMAIL_ALERT.to_string());
        }

        let result = client.join(&self.email).await;
        self.handle_result(result, Instant::now())
    }

    /// Apply the result of a signup request received at `now`.
    pub fn handle_result(
        &mut self,
        result: Result<WaitlistReply, ClientError>,
        now: Instant,
    ) -> FormOutcome {
        let reply = match result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!(error = %err, "Error joining waitlist");
                return FormOutcome::Alert(GENERIC_ERROR_ALERT.to_string());
            }
        };

        if reply.message.is_some_and(|m| !m.is_empty()) {
            self.confirmed_at = Some(now);
            self.email.clear();
            return FormOutcome::Confirmed;
        }

        match reply.error {
            Some(error) if !error.is_empty() => FormOutcome::Alert(error),
            _ => FormOutcome::Unchanged,
        }
    }
}
