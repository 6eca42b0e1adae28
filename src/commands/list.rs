use anyhow::Result;
use log::info;

use crate::api::{Authenticator, DesignAutomationClient};
use crate::auth::Credentials;

pub async fn list_activities_command(
    client_id: Option<String>,
    client_secret: Option<String>,
) -> Result<()> {
    let Some(token) = acquire_token(client_id, client_secret).await? else {
        return Ok(());
    };

    let client = DesignAutomationClient::new(token);
    let activities = client.list_activities().await?;

    println!("*** Activities ***");
    for activity in activities.data {
        println!("{}", activity);
    }

    Ok(())
}

pub async fn list_app_bundles_command(
    client_id: Option<String>,
    client_secret: Option<String>,
) -> Result<()> {
    let Some(token) = acquire_token(client_id, client_secret).await? else {
        return Ok(());
    };

    let client = DesignAutomationClient::new(token);
    let appbundles = client.list_app_bundles().await?;

    println!("*** AppBundles ***");
    for appbundle in appbundles.data {
        println!("{}", appbundle);
    }

    Ok(())
}

/// Resolve credentials and exchange them for an access token. Missing
/// credentials print a diagnostic and yield `Ok(None)`, and the caller
/// skips the listing step.
async fn acquire_token(
    client_id: Option<String>,
    client_secret: Option<String>,
) -> Result<Option<String>> {
    let Some(credentials) = Credentials::resolve(client_id, client_secret) else {
        println!(
            "FORGE_CLIENT_ID and/or FORGE_CLIENT_SECRET not defined either as environment variables or command options --ci/--cs."
        );
        return Ok(None);
    };

    let token = Authenticator::new().authenticate(&credentials).await?;
    info!("Token exchange complete");

    // The token is echoed for debugging against other tooling
    println!("{}", token.access_token);

    Ok(Some(token.access_token))
}
