use async_trait::async_trait;

use crate::{
    adapters::persistence::{JsonFilePersistence, parse_document},
    app_error::{AppError, AppResult},
    domain::entities::waitlist::Waitlist,
    use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for JsonFilePersistence {
    async fn load(&self) -> AppResult<Waitlist> {
        let raw = match tokio::fs::read(self.path()).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path().display(),
                    "Waitlist document missing, using empty waitlist"
                );
                return Ok(Waitlist::default());
            }
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "failed to read {}: {}",
                    self.path().display(),
                    err
                )));
            }
        };

        Ok(parse_document(&raw, self.path()).unwrap_or_else(Waitlist::unreadable))
    }

    async fn save(&self, waitlist: &Waitlist) -> AppResult<()> {
        self.write_document(waitlist).await
    }
}
