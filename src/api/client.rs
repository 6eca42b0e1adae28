use anyhow::Result;
use log::{debug, info};

use super::constants::design_automation_base_url;
use super::models::Page;

/// Design Automation v3 client holding the bearer token for this
/// invocation.
pub struct DesignAutomationClient {
    http_client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl DesignAutomationClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(design_automation_base_url(), access_token)
    }

    /// Point the client at a different base URL. Tests use this to target a
    /// local mock server.
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Fetch the first page of activity identifiers.
    pub async fn list_activities(&self) -> Result<Page> {
        self.get_page("activities").await
    }

    /// Fetch the first page of app bundle identifiers.
    pub async fn list_app_bundles(&self) -> Result<Page> {
        self.get_page("appbundles").await
    }

    async fn get_page(&self, endpoint: &str) -> Result<Page> {
        let url = format!("{}/{}", self.base_url, endpoint);
        info!("Fetching {}", url);

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        debug!("List request status: {}", response.status());

        if !response.status().is_success() {
            let error_text = response.text().await?;
            anyhow::bail!("Listing '{}' failed: {}", endpoint, error_text);
        }

        let page: Page = response.json().await?;
        Ok(page)
    }
}
