use clap::{Parser, Subcommand};

use crate::commands::{migrate::MigrateCmd, seed::SeedCmd};

#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "CLI for fyyur - prepares and populates the listings database."
)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Migrate(MigrateCmd),
    Seed(SeedCmd),
}

impl crate::commands::Executor for Command {
    async fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Migrate(cmd) => cmd.run().await,
            Command::Seed(cmd) => cmd.run().await,
        }
    }
}
