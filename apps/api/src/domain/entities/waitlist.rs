use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use waitlist_types::{Personality, WaitlistEntry};

/// The persisted document: every signup, in the order it was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waitlist {
    #[serde(default)]
    pub entries: Vec<WaitlistEntry>,
    /// Stand-in for a stored document that exists but could not be parsed.
    /// Readable as empty, never written back.
    #[serde(skip)]
    pub unreadable: bool,
}

impl Waitlist {
    pub fn unreadable() -> Self {
        Self {
            entries: Vec::new(),
            unreadable: true,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact, case-sensitive match against stored emails.
    pub fn contains_email(&self, email: &str) -> bool {
        self.entries.iter().any(|e| e.email == email)
    }

    pub fn push(&mut self, entry: WaitlistEntry) {
        self.entries.push(entry);
    }
}

/// A validated submission that has not been timestamped yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub assistant_name: String,
    pub personality: Personality,
    pub email: String,
    pub phone: String,
}

impl NewWaitlistEntry {
    pub fn into_entry(self, accepted_at: DateTime<Utc>) -> WaitlistEntry {
        WaitlistEntry {
            assistant_name: self.assistant_name,
            personality: self.personality,
            email: self.email,
            phone: self.phone,
            timestamp: format_timestamp(accepted_at),
        }
    }
}

/// RFC 3339, UTC, millisecond precision, `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
