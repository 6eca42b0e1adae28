use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "da-console")]
#[command(about = "A CLI tool for the APS Design Automation v3 API")]
#[command(version, disable_version_flag = true, disable_help_flag = true)]
pub struct Cli {
    /// Forge client id (overrides FORGE_CLIENT_ID)
    #[arg(long = "clientid", visible_alias = "ci", global = true, value_name = "CLIENT_ID")]
    pub client_id: Option<String>,

    /// Forge client secret (overrides FORGE_CLIENT_SECRET)
    #[arg(
        long = "clientsecret",
        visible_alias = "cs",
        global = true,
        value_name = "CLIENT_SECRET"
    )]
    pub client_secret: Option<String>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Print help
    #[arg(
        short = 'h',
        short_alias = '?',
        long = "help",
        global = true,
        action = ArgAction::Help
    )]
    help: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the activities visible to these credentials
    #[command(name = "listactivities", disable_help_flag = true)]
    ListActivities,
    /// List the app bundles visible to these credentials
    #[command(name = "listappbundles", disable_help_flag = true)]
    ListAppBundles,
}
