//! Waitlist HTTP client implementation.

use url::Url;

#[cfg(feature = "client")]
use waitlist_types::{
    AdminLoginRequest, CountResponse, SubmitEntryRequest, SubmitEntryResponse, WaitlistEntry,
    WaitlistEntriesResponse,
};

use crate::error::WaitlistError;

const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Configuration for the waitlist client.
#[derive(Debug, Clone)]
pub struct WaitlistConfig {
    /// Base URL of the waitlist server (e.g., "http://localhost:3001")
    pub base_url: String,
}

impl WaitlistConfig {
    /// Read `WAITLIST_API_URL`, falling back to `http://localhost:3001`.
    pub fn from_env() -> Self {
        let base_url = std::env::var("WAITLIST_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { base_url }
    }
}

impl Default for WaitlistConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Client for the public and admin waitlist endpoints.
///
/// One request per call, no retries.
pub struct WaitlistClient {
    base_url: Url,
    #[cfg(feature = "client")]
    http_client: reqwest::Client,
}

impl WaitlistClient {
    /// Create a new waitlist client.
    ///
    /// # Returns
    /// A configured `WaitlistClient` or an error if the base URL is not an
    /// absolute http(s) URL.
    pub fn new(config: WaitlistConfig) -> Result<Self, WaitlistError> {
        let mut base_url = Url::parse(config.base_url.trim())
            .map_err(|e| WaitlistError::Config(format!("invalid base_url: {}", e)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(WaitlistError::Config(
                "base_url must use http or https".into(),
            ));
        }

        // Relative joins replace the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            #[cfg(feature = "client")]
            http_client: reqwest::Client::new(),
        })
    }

    /// Absolute URL for an API path such as `api/waitlist/count`.
    pub fn endpoint(&self, path: &str) -> Result<Url, WaitlistError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| WaitlistError::Config(format!("invalid endpoint {}: {}", path, e)))
    }

    /// Current number of signups.
    #[cfg(feature = "client")]
    pub async fn count(&self) -> Result<usize, WaitlistError> {
        let response = self
            .http_client
            .get(self.endpoint("api/waitlist/count")?)
            .send()
            .await?;
        let body: CountResponse = read_json(response).await?;
        Ok(body.count)
    }

    /// Join the waitlist.
    ///
    /// # Errors
    /// `DuplicateEmail` when the email is already registered,
    /// `InvalidInput` when the server rejects a field.
    #[cfg(feature = "client")]
    pub async fn submit(
        &self,
        request: &SubmitEntryRequest,
    ) -> Result<SubmitEntryResponse, WaitlistError> {
        let response = self
            .http_client
            .post(self.endpoint("api/waitlist")?)
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    /// Check the admin password. The server issues no session; callers keep
    /// track of a successful login themselves.
    #[cfg(feature = "client")]
    pub async fn admin_login(&self, password: &str) -> Result<(), WaitlistError> {
        let response = self
            .http_client
            .post(self.endpoint("api/admin/login")?)
            .json(&AdminLoginRequest {
                password: password.to_string(),
            })
            .send()
            .await?;
        let _: serde_json::Value = read_json(response).await?;
        Ok(())
    }

    /// Every entry, in signup order.
    #[cfg(feature = "client")]
    pub async fn admin_entries(&self) -> Result<Vec<WaitlistEntry>, WaitlistError> {
        let response = self
            .http_client
            .get(self.endpoint("api/admin/waitlist")?)
            .send()
            .await?;
        let body: WaitlistEntriesResponse = read_json(response).await?;
        Ok(body.entries)
    }
}

#[cfg(feature = "client")]
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, WaitlistError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(WaitlistError::from_response(status.as_u16(), &body));
    }

    Ok(serde_json::from_slice(&body)?)
}
