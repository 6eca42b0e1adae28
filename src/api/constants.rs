//! Endpoint constants for the APS authentication and Design Automation APIs.

/// APS authentication service base URL (v2 token endpoint lives under this)
pub const AUTH_BASE_URL: &str = "https://developer.api.autodesk.com/authentication/v2";

/// Design Automation v3 base URL
pub const DESIGN_AUTOMATION_BASE_URL: &str = "https://developer.api.autodesk.com/da/us-east/v3";

/// OAuth scope required for Design Automation calls
pub const SCOPE_CODE_ALL: &str = "code:all";

/// Environment variable overriding the authentication base URL
pub const AUTH_BASE_URL_VAR: &str = "APS_AUTH_BASE_URL";

/// Environment variable overriding the Design Automation base URL
pub const DESIGN_AUTOMATION_BASE_URL_VAR: &str = "APS_DA_BASE_URL";

/// Authentication base URL, honoring the environment override. Tests point
/// this at a local mock server.
pub fn auth_base_url() -> String {
    std::env::var(AUTH_BASE_URL_VAR).unwrap_or_else(|_| AUTH_BASE_URL.to_string())
}

/// Design Automation base URL, honoring the environment override.
pub fn design_automation_base_url() -> String {
    std::env::var(DESIGN_AUTOMATION_BASE_URL_VAR)
        .unwrap_or_else(|_| DESIGN_AUTOMATION_BASE_URL.to_string())
}
