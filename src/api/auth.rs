use anyhow::Result;
use log::{debug, info};

use super::constants::{SCOPE_CODE_ALL, auth_base_url};
use super::models::TokenResponse;
use crate::auth::Credentials;

/// Performs the OAuth2 client-credentials grant against the APS
/// authentication service.
pub struct Authenticator {
    http_client: reqwest::Client,
    base_url: String,
}

impl Authenticator {
    pub fn new() -> Self {
        Self::with_base_url(auth_base_url())
    }

    /// Point the authenticator at a different base URL. Tests use this to
    /// target a local mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Exchange a client id/secret pair for an access token, requesting the
    /// `code:all` scope.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<TokenResponse> {
        let token_url = format!("{}/token", self.base_url);
        info!("Requesting access token from {}", token_url);

        let response = self
            .http_client
            .post(&token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", credentials.client_id.as_str()),
                ("client_secret", credentials.client_secret.as_str()),
                ("scope", SCOPE_CODE_ALL),
            ])
            .send()
            .await?;

        debug!("Token request status: {}", response.status());

        if !response.status().is_success() {
            let error_text = response.text().await?;
            anyhow::bail!("Authentication failed: {}", error_text);
        }

        let token: TokenResponse = response.json().await?;
        info!("Successfully obtained access token");
        Ok(token)
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new()
    }
}
