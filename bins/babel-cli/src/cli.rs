//! Command-line argument parsing for babel

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Library of Babel - search and browse every possible page
#[derive(Parser, Debug)]
#[command(name = "babel")]
#[command(author, version, about = "Library of Babel - search and browse every possible page", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search for text in the library
    Search {
        /// Text to search for (29-symbol alphabet: space, a-z, comma, period)
        text: String,

        /// Skip this many results
        #[arg(short, long, default_value = "0")]
        offset: i64,

        /// Maximum number of results
        #[arg(short, long, default_value = "20")]
        limit: i64,

        /// Stream results as they are found instead of paginating
        #[arg(short, long)]
        stream: bool,
    },

    /// Browse a page given its address: <hexagon>.<wall>.<shelf>.<book>.<page>
    Browse {
        /// Period-separated address
        address: String,
    },

    /// Show how many addresses the library claims for a text
    Count {
        /// Text to count occurrences of
        text: String,
    },

    /// Open a uniformly random page
    Random,

    /// Run the HTTP JSON API server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        use tracing_subscriber::{fmt, EnvFilter};

        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt().with_env_filter(filter).with_target(false).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_search() {
        let cli = Cli::parse_from(["babel", "search", "hello world"]);
        match cli.command {
            Command::Search {
                text,
                offset,
                limit,
                stream,
            } => {
                assert_eq!(text, "hello world");
                assert_eq!(offset, 0);
                assert_eq!(limit, 20);
                assert!(!stream);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parsing_search_with_options() {
        let cli = Cli::parse_from([
            "babel", "search", "hello", "-o", "40", "-l", "10", "--stream", "-vv",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Search {
                offset,
                limit,
                stream,
                ..
            } => {
                assert_eq!(offset, 40);
                assert_eq!(limit, 10);
                assert!(stream);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parsing_browse() {
        let cli = Cli::parse_from(["babel", "browse", "0.2.1.12.30"]);
        assert!(matches!(cli.command, Command::Browse { address } if address == "0.2.1.12.30"));
    }
}
