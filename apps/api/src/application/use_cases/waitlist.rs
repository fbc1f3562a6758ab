use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::instrument;
use waitlist_types::{Personality, WaitlistEntry};

use crate::app_error::{AppError, AppResult};
use crate::application::validators::{is_valid_email, required_field};
use crate::domain::entities::waitlist::{NewWaitlistEntry, Waitlist};

// ============================================================================
// Repository
// ============================================================================

/// Whole-document storage for the waitlist.
#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Current collection. A missing document is an empty waitlist; an
    /// unparsable one is an empty waitlist flagged `unreadable`.
    async fn load(&self) -> AppResult<Waitlist>;

    /// Replaces the stored document. Readers never observe a partial write.
    async fn save(&self, waitlist: &Waitlist) -> AppResult<()>;
}

// ============================================================================
// Inputs / Outputs
// ============================================================================

/// A submission as received from the client. Any field may be absent.
#[derive(Debug, Clone, Default)]
pub struct SubmitEntryInput {
    pub assistant_name: Option<String>,
    pub personality: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SubmitEntryInput {
    /// Checks presence first, then personality and email format.
    ///
    /// Fields are trimmed, so the stored email (and the uniqueness check) uses
    /// the trimmed value. The email format check is stricter than presence.
    pub fn validate(&self) -> AppResult<NewWaitlistEntry> {
        let (Some(assistant_name), Some(personality), Some(email), Some(phone)) = (
            required_field(self.assistant_name.as_deref()),
            required_field(self.personality.as_deref()),
            required_field(self.email.as_deref()),
            required_field(self.phone.as_deref()),
        ) else {
            return Err(AppError::InvalidInput("Missing required fields".into()));
        };

        let personality: Personality = personality
            .parse()
            .map_err(|_| AppError::InvalidInput("Invalid personality".into()))?;

        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }

        Ok(NewWaitlistEntry {
            assistant_name: assistant_name.to_string(),
            personality,
            email: email.to_string(),
            phone: phone.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub entry: WaitlistEntry,
    /// Waitlist length after the insert.
    pub count: usize,
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    // Held across load/check/append/save so concurrent submits in this process
    // cannot both pass the uniqueness check.
    submit_lock: Arc<Mutex<()>>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self {
            repo,
            submit_lock: Arc::new(Mutex::new(())),
        }
    }

    #[instrument(skip(self))]
    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.repo.load().await?.len())
    }

    /// Every entry in insertion order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        Ok(self.repo.load().await?.entries)
    }

    #[instrument(skip(self, input))]
    pub async fn submit(&self, input: SubmitEntryInput) -> AppResult<SubmitOutcome> {
        let new_entry = input.validate()?;

        let _guard = self.submit_lock.lock().await;

        let mut waitlist = self.repo.load().await?;
        if waitlist.unreadable {
            return Err(AppError::Storage(
                "stored waitlist could not be parsed; refusing to overwrite it".into(),
            ));
        }
        if waitlist.contains_email(&new_entry.email) {
            tracing::info!("Rejected duplicate waitlist email");
            return Err(AppError::DuplicateEmail);
        }

        let entry = new_entry.into_entry(Utc::now());
        waitlist.push(entry.clone());
        self.repo.save(&waitlist).await?;

        let count = waitlist.len();
        tracing::info!(count, personality = %entry.personality, "Added waitlist entry");

        Ok(SubmitOutcome { entry, count })
    }
}
