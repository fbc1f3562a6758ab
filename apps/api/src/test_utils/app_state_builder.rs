//! Test app state builder for HTTP-level integration testing.
//!
//! This module provides `TestAppStateBuilder` which creates a minimal `AppState`
//! backed by an in-memory waitlist repository.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;
use waitlist_types::WaitlistEntry;

use crate::{
    adapters::http::app_state::AppState,
    infra::config::AppConfig,
    test_utils::InMemoryWaitlistRepo,
    use_cases::{admin::AdminUseCases, waitlist::WaitlistUseCases},
};

pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let (app_state, repo) = TestAppStateBuilder::new()
///     .with_entry(create_test_entry(|e| e.email = "a@x.com".to_string()))
///     .build_with_repo();
/// ```
pub struct TestAppStateBuilder {
    entries: Vec<WaitlistEntry>,
    admin_password: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            entries: vec![],
            admin_password: TEST_ADMIN_PASSWORD.to_string(),
        }
    }

    pub fn with_entry(mut self, entry: WaitlistEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn with_admin_password(mut self, password: &str) -> Self {
        self.admin_password = password.to_string();
        self
    }

    /// Build the AppState and return the repo for assertions.
    pub fn build_with_repo(self) -> (AppState, Arc<InMemoryWaitlistRepo>) {
        let repo = Arc::new(InMemoryWaitlistRepo::with_entries(self.entries));
        let admin_password = SecretString::new(self.admin_password.into());

        let config = AppConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            admin_password: admin_password.clone(),
            waitlist_file: PathBuf::from("unused-in-tests.json"),
            cors_origin: None,
            log_file: None,
        };

        let app_state = AppState {
            config: Arc::new(config),
            waitlist_use_cases: Arc::new(WaitlistUseCases::new(repo.clone())),
            admin_use_cases: Arc::new(AdminUseCases::new(admin_password)),
        };

        (app_state, repo)
    }

    pub fn build(self) -> AppState {
        self.build_with_repo().0
    }
}
