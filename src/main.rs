use anyhow::Result;
use clap::Parser;
use log::info;

use da_console::cli::{Cli, Commands};
use da_console::commands::list::{list_activities_command, list_app_bundles_command};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting da-console");

    match cli.command {
        Some(Commands::ListActivities) => {
            list_activities_command(cli.client_id, cli.client_secret).await?;
        }
        Some(Commands::ListAppBundles) => {
            list_app_bundles_command(cli.client_id, cli.client_secret).await?;
        }
        None => println!("No command was selected"),
    }

    Ok(())
}
