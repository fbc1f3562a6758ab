use serde::{Deserialize, Serialize};

use crate::Personality;

/// One waitlist signup as persisted and as returned by the admin listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub assistant_name: String,
    pub personality: Personality,
    /// Unique across the waitlist, compared case-sensitively.
    pub email: String,
    pub phone: String,
    /// RFC 3339 UTC timestamp assigned by the server at insert.
    pub timestamp: String,
}
