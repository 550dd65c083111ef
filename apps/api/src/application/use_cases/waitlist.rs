use std::sync::Arc;

use async_trait::async_trait;

use crate::app_error::{AppError, AppResult};
use crate::application::validators::is_valid_email;
use crate::domain::entities::waitlist_entry::WaitlistEntry;

// ============================================================================
// Repository Trait
// ============================================================================

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Store a new entry. No deduplication happens here or in the schema.
    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry>;
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    strict_email: bool,
}

impl WaitlistUseCases {
    /// `strict_email` adds a format check on top of the non-empty check.
    pub fn new(repo: Arc<dyn WaitlistRepo>, strict_email: bool) -> Self {
        Self { repo, strict_email }
    }

    /// Record an email on the waitlist.
    /// The value is stored exactly as given. At most one insert is attempted.
    pub async fn join_waitlist(&self, email: &str) -> AppResult<WaitlistEntry> {
        if email.is_empty() {
            return Err(AppError::InvalidEmail);
        }

        if self.strict_email && !is_valid_email(email) {
            return Err(AppError::InvalidEmail);
        }

        let entry = self.repo.insert(email).await?;
        tracing::info!(entry_id = %entry.id, "Added to waitlist");

        Ok(entry)
    }
}
