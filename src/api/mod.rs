//! APS authentication and Design Automation v3 API module.
//!
//! Covers the two remote collaborators of this tool: the authentication
//! service (client-credentials token exchange) and the Design Automation
//! listing endpoints for activities and app bundles.

pub mod auth;
pub mod client;
pub mod constants;
pub mod models;

pub use auth::Authenticator;
pub use client::DesignAutomationClient;
pub use models::{Page, TokenResponse};
