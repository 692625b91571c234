pub mod init;
pub mod today;
pub mod upload;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Watch input activity and track daily playtime")]
    Watch,
    #[command(about = "Display today's playtime summary")]
    Today,
    #[command(about = "Upload today's statistics to the collector now")]
    Upload,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Watch => watch::cmd().await,
            Commands::Today => today::cmd(),
            Commands::Upload => upload::cmd().await,
        }
    }
}
