//! CLI module for the HBnB API

pub mod serve;

use clap::{Parser, Subcommand};

/// HBnB API - in-memory rental listings service
#[derive(Parser)]
#[command(name = "hbnb-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["hbnb-api", "serve"]).unwrap();

        match cli.command {
            Command::Serve(args) => {
                assert!(args.port.is_none());
                assert!(!args.seed);
            }
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["hbnb-api", "serve", "--port", "9000", "--seed"]).unwrap();

        let Command::Serve(args) = cli.command;
        assert_eq!(args.port, Some(9000));
        assert!(args.seed);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["hbnb-api"]).is_err());
    }
}
