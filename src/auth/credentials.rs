use log::info;

/// Environment variable holding the Forge client id.
pub const CLIENT_ID_VAR: &str = "FORGE_CLIENT_ID";

/// Environment variable holding the Forge client secret.
pub const CLIENT_SECRET_VAR: &str = "FORGE_CLIENT_SECRET";

/// A resolved client id/secret pair for the client-credentials grant.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    /// Resolve credentials from explicit command-line overrides with
    /// environment-variable fallback. Returns `None` if either value is
    /// still missing after resolution.
    pub fn resolve(client_id: Option<String>, client_secret: Option<String>) -> Option<Credentials> {
        Self::resolve_with(client_id, client_secret, |name| std::env::var(name).ok())
    }

    /// Same as [`Credentials::resolve`] with an injectable environment
    /// lookup. Lookup failures (unset, non-UTF-8) are treated as absent.
    pub fn resolve_with<F>(
        client_id: Option<String>,
        client_secret: Option<String>,
        env: F,
    ) -> Option<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client_id = client_id.or_else(|| env(CLIENT_ID_VAR))?;
        let client_secret = client_secret.or_else(|| env(CLIENT_SECRET_VAR))?;

        info!("Resolved credentials for client id {}", client_id);

        Some(Credentials {
            client_id,
            client_secret,
        })
    }
}
