//! CLI module for the usuarios API
//!
//! - `serve`: HTTP server (default)
//! - `probe`: check database connectivity and exit
//! - `openapi`: print the OpenAPI document

pub mod openapi;
pub mod probe;
pub mod serve;

use clap::{Parser, Subcommand};

/// Usuarios API - service-provider listings over HTTP
#[derive(Debug, Parser)]
#[command(name = "usuarios-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Default, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    #[default]
    Serve,

    /// Check database connectivity and exit non-zero on failure
    Probe,

    /// Print the OpenAPI document as JSON
    Openapi,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["usuarios-api"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Serve);
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["usuarios-api", "probe"]).unwrap();
        assert_eq!(cli.command, Some(Command::Probe));

        let cli = Cli::try_parse_from(["usuarios-api", "openapi"]).unwrap();
        assert_eq!(cli.command, Some(Command::Openapi));
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["usuarios-api", "ui"]).is_err());
    }
}
