//! Rust SDK for the waitlist API.
//!
//! This SDK drives the waitlist service from the client side.
//!
//! # Features
//!
//! - **HTTP client** - `WaitlistClient` wraps every endpoint (feature `client`)
//! - **Signup flow** - `SignupFlow`, the name → personality → signup → success state machine
//! - **Admin flow** - `AdminFlow`, login → dashboard with refresh and CSV/JSON export
//!
//! Flows talk to the server through the [`WaitlistApi`] trait, so they can be
//! driven by `WaitlistClient` or by any other implementation.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use waitlist_sdk::{SignupFlow, SimulatedAvailability, WaitlistClient, WaitlistConfig};
//!
//! let client = Arc::new(WaitlistClient::new(WaitlistConfig::from_env())?);
//! let mut flow = SignupFlow::new(client, Arc::new(SimulatedAvailability::default()));
//!
//! flow.set_assistant_name("Ada");
//! flow.check_name().await?;
//! flow.continue_to_signup()?;
//! flow.set_email("a@x.com");
//! flow.set_phone("+1-555-0100");
//! let count = flow.submit().await?;
//! ```

mod admin;
mod api;
mod availability;
mod client;
mod error;
mod export;
mod signup;

pub use admin::{AdminFlow, AdminView};
pub use api::WaitlistApi;
pub use availability::{NameAvailability, SimulatedAvailability};
pub use client::{WaitlistClient, WaitlistConfig};
pub use error::{FlowError, WaitlistError};
pub use export::{Export, entries_to_csv, entries_to_json};
pub use signup::{SignupFlow, SignupStep};

// Re-export shared types for convenience
pub use waitlist_types::{
    ErrorCode, Personality, SubmitEntryRequest, SubmitEntryResponse, WaitlistEntry,
};
