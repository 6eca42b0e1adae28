use serde::Deserialize;

/// Response from the client-credentials token exchange.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// One page of identifiers from a Design Automation list endpoint.
///
/// Only the first page is ever fetched; `pagination_token` is decoded but
/// not followed.
#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub data: Vec<String>,
    #[serde(rename = "paginationToken", default)]
    pub pagination_token: Option<String>,
}
