//! Client-side admin dashboard state machine.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use waitlist_types::WaitlistEntry;

use crate::{api::WaitlistApi, error::FlowError, export::Export};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Login,
    Dashboard,
}

impl AdminView {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminView::Login => "login",
            AdminView::Dashboard => "dashboard",
        }
    }
}

/// Login → dashboard.
///
/// "Logged in" is only this flow's own state; the server issues no session.
pub struct AdminFlow {
    api: Arc<dyn WaitlistApi>,
    view: AdminView,
    entries: Vec<WaitlistEntry>,
}

impl AdminFlow {
    pub fn new(api: Arc<dyn WaitlistApi>) -> Self {
        Self {
            api,
            view: AdminView::Login,
            entries: Vec::new(),
        }
    }

    pub fn view(&self) -> AdminView {
        self.view
    }

    pub fn is_authenticated(&self) -> bool {
        self.view == AdminView::Dashboard
    }

    /// Entries held since the last successful refresh.
    pub fn entries(&self) -> &[WaitlistEntry] {
        &self.entries
    }

    /// login → dashboard, followed by a refresh. If the refresh fails the
    /// flow stays on the dashboard and the error is returned.
    pub async fn login(&mut self, password: &str) -> Result<(), FlowError> {
        self.require(AdminView::Login, "log in")?;

        self.api.admin_login(password).await?;
        self.view = AdminView::Dashboard;
        tracing::info!("Admin logged in");

        self.refresh().await.map(|_| ())
    }

    /// dashboard → login, dropping the held entries.
    pub fn logout(&mut self) -> Result<(), FlowError> {
        self.require(AdminView::Dashboard, "log out")?;
        self.view = AdminView::Login;
        self.entries.clear();
        Ok(())
    }

    /// Re-fetch the full list. On failure the held list is kept.
    pub async fn refresh(&mut self) -> Result<usize, FlowError> {
        self.require(AdminView::Dashboard, "refresh")?;
        self.entries = self.api.admin_entries().await?;
        Ok(self.entries.len())
    }

    pub fn export_csv(&self) -> Result<Export, FlowError> {
        self.export_csv_on(today())
    }

    pub fn export_json(&self) -> Result<Export, FlowError> {
        self.export_json_on(today())
    }

    pub fn export_csv_on(&self, date: NaiveDate) -> Result<Export, FlowError> {
        self.require_exportable()?;
        Ok(Export::csv(&self.entries, date))
    }

    pub fn export_json_on(&self, date: NaiveDate) -> Result<Export, FlowError> {
        self.require_exportable()?;
        Export::json(&self.entries, date).map_err(FlowError::Serialize)
    }

    fn require_exportable(&self) -> Result<(), FlowError> {
        self.require(AdminView::Dashboard, "export")?;
        if self.entries.is_empty() {
            return Err(FlowError::NothingToExport);
        }
        Ok(())
    }

    fn require(&self, expected: AdminView, action: &'static str) -> Result<(), FlowError> {
        if self.view != expected {
            return Err(FlowError::InvalidTransition {
                from: self.view.as_str(),
                action,
            });
        }
        Ok(())
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
