use std::path::{Path, PathBuf};

use crate::{app_error::AppResult, domain::entities::waitlist::Waitlist};

pub mod waitlist;

const MAX_DOCUMENT_LOG_LEN: usize = 200;

/// Parse a stored JSON document, logging a warning when it is not valid.
///
/// # Arguments
/// * `raw` - Bytes read from disk
/// * `path` - Where the bytes came from (for logging)
pub fn parse_document<T: serde::de::DeserializeOwned>(raw: &[u8], path: &Path) -> Option<T> {
    match serde_json::from_slice(raw) {
        Ok(document) => Some(document),
        Err(err) => {
            // Truncate raw content to prevent log bloat from large documents
            let raw_str = String::from_utf8_lossy(raw);
            let truncated = if raw_str.chars().count() > MAX_DOCUMENT_LOG_LEN {
                format!(
                    "{}...",
                    raw_str.chars().take(MAX_DOCUMENT_LOG_LEN).collect::<String>()
                )
            } else {
                raw_str.into_owned()
            };

            tracing::warn!(
                path = %path.display(),
                raw_json = %truncated,
                error = %err,
                "Failed to parse waitlist document, serving it as empty and refusing writes"
            );
            None
        }
    }
}

/// The waitlist stored as one pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFilePersistence { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty document if none exists yet. Existing files are left as is.
    pub async fn init(&self) -> AppResult<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        tracing::info!(path = %self.path.display(), "Creating empty waitlist document");
        self.write_document(&Waitlist::default()).await
    }

    async fn write_document(&self, waitlist: &Waitlist) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let payload = serde_json::to_vec_pretty(waitlist)?;

        // Write to a sibling and rename so readers see either the old or the new document.
        let temp_path = self
            .path
            .with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));
        if let Err(err) = tokio::fs::write(&temp_path, payload).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(err.into());
        }
        if let Err(err) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(err.into());
        }

        Ok(())
    }
}
