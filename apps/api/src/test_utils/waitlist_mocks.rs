//! In-memory mock implementation of the waitlist repository.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use waitlist_types::WaitlistEntry;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist::Waitlist,
    use_cases::waitlist::WaitlistRepo,
};

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub waitlist: Mutex<Waitlist>,
    loads: AtomicUsize,
    saves: AtomicUsize,
    fail_loads: AtomicBool,
    fail_saves: AtomicBool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            waitlist: Mutex::new(Waitlist {
                entries,
                ..Waitlist::default()
            }),
            ..Self::default()
        }
    }

    /// Get all entries (for test assertions).
    pub fn entries(&self) -> Vec<WaitlistEntry> {
        self.waitlist.lock().unwrap().entries.clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Behave like a store whose document exists but does not parse.
    pub fn mark_unreadable(&self) {
        *self.waitlist.lock().unwrap() = Waitlist::unreadable();
    }

    /// Make every subsequent `load` fail with a storage error.
    pub fn fail_loads(&self) {
        self.fail_loads.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent `save` fail with a storage error.
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn load(&self) -> AppResult<Waitlist> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(AppError::Storage("simulated read failure".into()));
        }
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.waitlist.lock().unwrap().clone())
    }

    async fn save(&self, waitlist: &Waitlist) -> AppResult<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(AppError::Storage("simulated write failure".into()));
        }
        // Yield so concurrent submitters get a chance to interleave.
        tokio::task::yield_now().await;
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.waitlist.lock().unwrap() = waitlist.clone();
        Ok(())
    }
}
