//! Test app state builder for HTTP-level testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by in-memory mocks.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    application::use_cases::waitlist::{WaitlistRepo, WaitlistUseCases},
    infra::config::AppConfig,
    test_utils::{FailingWaitlistRepo, InMemoryWaitlistRepo},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo) = TestAppStateBuilder::new()
///     .with_strict_email_validation(true)
///     .build();
/// ```
pub struct TestAppStateBuilder {
    strict_email_validation: bool,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            strict_email_validation: false,
        }
    }

    pub fn with_strict_email_validation(mut self, strict: bool) -> Self {
        self.strict_email_validation = strict;
        self
    }

    /// Build with a working in-memory repository.
    pub fn build(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::new());
        let app_state = self.build_with_repo(repo.clone());
        (app_state, repo)
    }

    /// Build with a repository that fails every insert.
    pub fn build_with_failing_repo(self) -> (AppState, Arc<FailingWaitlistRepo>) {
        let repo = Arc::new(FailingWaitlistRepo::new(
            "pool timed out while waiting for an open connection",
        ));
        let app_state = self.build_with_repo(repo.clone());
        (app_state, repo)
    }

    fn build_with_repo(self, repo: Arc<dyn WaitlistRepo>) -> AppState {
        let config = AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            database_url: SecretString::new("postgres://test@localhost/test".into()),
            db_max_connections: 1,
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            run_migrations: false,
            strict_email_validation: self.strict_email_validation,
            log_file: None,
        };

        let waitlist_use_cases = WaitlistUseCases::new(repo, config.strict_email_validation);

        AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(waitlist_use_cases),
        }
    }
}
