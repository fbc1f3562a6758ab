use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use crate::app_error::{AppError, AppResult};

/// Shared-secret gate for the admin dashboard.
///
/// No session or token is issued on success. The admin listing route is not
/// guarded server-side; clients are expected to call `login` first.
#[derive(Clone)]
pub struct AdminUseCases {
    admin_password: SecretString,
}

impl AdminUseCases {
    pub fn new(admin_password: SecretString) -> Self {
        Self { admin_password }
    }

    #[instrument(skip_all)]
    pub async fn login(&self, password: Option<&str>) -> AppResult<()> {
        match password {
            Some(candidate) if candidate == self.admin_password.expose_secret() => {
                tracing::info!("Admin login succeeded");
                Ok(())
            }
            _ => {
                tracing::warn!("Admin login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
