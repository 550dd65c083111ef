//! In-memory mock implementations of the waitlist repository trait.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all entries in insertion order (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry> {
        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            email: email.to_string(),
            created_at: Some(chrono::Utc::now().naive_utc()),
        };

        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }
}

/// Repository whose every insert fails, as if the database were unreachable.
pub struct FailingWaitlistRepo {
    cause: String,
    attempts: AtomicUsize,
}

impl FailingWaitlistRepo {
    pub fn new(cause: &str) -> Self {
        Self {
            cause: cause.to_string(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Number of inserts attempted so far.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _email: &str) -> AppResult<WaitlistEntry> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Database(self.cause.clone()))
    }
}
