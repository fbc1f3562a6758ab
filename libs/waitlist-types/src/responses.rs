use serde::{Deserialize, Serialize};

use crate::{Personality, WaitlistEntry};

/// Body of `POST /api/waitlist` as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitEntryRequest {
    pub assistant_name: String,
    pub personality: Personality,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitEntryResponse {
    pub success: bool,
    pub count: usize,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
}

/// Full admin listing, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitlistEntriesResponse {
    pub entries: Vec<WaitlistEntry>,
    pub count: usize,
}
