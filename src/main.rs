use clap::Parser;
use usuarios_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Serve => cli::serve::run().await,
        Command::Probe => cli::probe::run().await,
        Command::Openapi => cli::openapi::run(),
    }
}
