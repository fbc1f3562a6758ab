use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use waitlist_types::WaitlistEntry;

const CSV_HEADERS: [&str; 5] = ["Assistant Name", "Personality", "Email", "Phone", "Timestamp"];

/// A rendered download: what a browser would save, or what `write_to` puts on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

impl Export {
    pub fn csv(entries: &[WaitlistEntry], date: NaiveDate) -> Self {
        Self {
            filename: format!("waitlist-{}.csv", date.format("%Y-%m-%d")),
            content_type: "text/csv",
            body: entries_to_csv(entries),
        }
    }

    pub fn json(entries: &[WaitlistEntry], date: NaiveDate) -> Result<Self, serde_json::Error> {
        Ok(Self {
            filename: format!("waitlist-{}.json", date.format("%Y-%m-%d")),
            content_type: "application/json",
            body: entries_to_json(entries)?,
        })
    }

    /// Write the body into `dir` under `filename`, replacing any existing file.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.body)?;
        Ok(path)
    }
}

/// Header row plus one row per entry; every cell quoted, rows joined by `\n`.
pub fn entries_to_csv(entries: &[WaitlistEntry]) -> String {
    let header = CSV_HEADERS.join(",");
    let rows = entries.iter().map(|entry| {
        [
            entry.assistant_name.as_str(),
            entry.personality.as_str(),
            entry.email.as_str(),
            entry.phone.as_str(),
            entry.timestamp.as_str(),
        ]
        .iter()
        .map(|cell| quote_cell(cell))
        .collect::<Vec<_>>()
        .join(",")
    });

    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed entry array with the same keys the API returns.
pub fn entries_to_json(entries: &[WaitlistEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

fn quote_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
