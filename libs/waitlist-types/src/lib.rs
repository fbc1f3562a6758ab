//! Shared types for the waitlist API.
//!
//! This crate provides:
//! - The persisted `WaitlistEntry` record and its `Personality` enum
//! - Request and response bodies for every endpoint
//! - Error codes carried in error response bodies

mod entry;
mod errors;
mod personality;
mod responses;

pub use entry::WaitlistEntry;
pub use errors::{ErrorCode, ErrorResponse, ParsePersonalityError};
pub use personality::Personality;
pub use responses::{
    AdminLoginRequest, AdminLoginResponse, CountResponse, SubmitEntryRequest,
    SubmitEntryResponse, WaitlistEntriesResponse,
};
