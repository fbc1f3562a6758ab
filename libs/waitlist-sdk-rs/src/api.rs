use async_trait::async_trait;
use waitlist_types::{SubmitEntryRequest, SubmitEntryResponse, WaitlistEntry};

use crate::error::WaitlistError;

/// The server operations the client flows depend on.
#[async_trait]
pub trait WaitlistApi: Send + Sync {
    async fn count(&self) -> Result<usize, WaitlistError>;
    async fn submit(
        &self,
        request: &SubmitEntryRequest,
    ) -> Result<SubmitEntryResponse, WaitlistError>;
    async fn admin_login(&self, password: &str) -> Result<(), WaitlistError>;
    async fn admin_entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError>;
}

#[cfg(feature = "client")]
#[async_trait]
impl WaitlistApi for crate::client::WaitlistClient {
    async fn count(&self) -> Result<usize, WaitlistError> {
        crate::client::WaitlistClient::count(self).await
    }

    async fn submit(
        &self,
        request: &SubmitEntryRequest,
    ) -> Result<SubmitEntryResponse, WaitlistError> {
        crate::client::WaitlistClient::submit(self, request).await
    }

    async fn admin_login(&self, password: &str) -> Result<(), WaitlistError> {
        crate::client::WaitlistClient::admin_login(self, password).await
    }

    async fn admin_entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        crate::client::WaitlistClient::admin_entries(self).await
    }
}
