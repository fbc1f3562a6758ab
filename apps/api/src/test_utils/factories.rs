//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use waitlist_types::{Personality, WaitlistEntry};

use crate::use_cases::waitlist::SubmitEntryInput;

/// Create a stored waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        assistant_name: "Jarvis".to_string(),
        personality: Personality::Friendly,
        email: "user@example.com".to_string(),
        phone: "+1-555-0199".to_string(),
        timestamp: "2026-01-01T00:00:00.000Z".to_string(),
    };
    overrides(&mut entry);
    entry
}

/// A complete, valid submission for the given email.
pub fn test_submission(email: &str) -> SubmitEntryInput {
    SubmitEntryInput {
        assistant_name: Some("Ada".to_string()),
        personality: Some("professional".to_string()),
        email: Some(email.to_string()),
        phone: Some("+1-555-0100".to_string()),
    }
}
