//! CLI for inspecting sort-order synchronization from a shell.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sortsync::config::SyncConfig;
use sortsync::sort::RELEVANCE;
use sortsync::sync::SortOrderSync;
use std::fs;
use std::path::PathBuf;

/// Top-level CLI for the sortsync reconciler.
#[derive(Debug, Parser)]
#[command(name = "sortsync")]
#[command(about = "Reconcile a sort query parameter with a page URL", long_about = None)]
pub struct Cli {
    /// TOML file overriding the sort parameter name and sentinel value.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show which sort order a page URL selects on load.
    Init {
        /// Page URL including its query string.
        #[arg(long)]
        url: String,
    },

    /// Apply a sort selection to a page URL and print the next URL.
    Apply {
        /// Page URL including its query string.
        #[arg(long)]
        url: String,

        /// Selected value; "relevance" or an empty value removes the sort key.
        #[arg(long, default_value = "")]
        sort: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => SyncConfig::from_toml_str(&fs::read_to_string(path)?)?,
            None => SyncConfig::default(),
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let sync = SortOrderSync::new(cfg);

        match cli.command {
            CliCommand::Init { url } => {
                let state = sync.initialize_from_url(&url)?;
                match state.active {
                    Some(order) => println!("{order}"),
                    None => println!("{RELEVANCE}"),
                }
            }
            CliCommand::Apply { url, sort } => {
                println!("{}", sync.apply_selection(&sort, &url)?);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_init() {
        let cli = Cli::try_parse_from(["sortsync", "init", "--url", "https://example.com/?q=x"])
            .unwrap();
        match cli.command {
            CliCommand::Init { url } => assert_eq!(url, "https://example.com/?q=x"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_apply_with_default_sort() {
        let cli = Cli::try_parse_from(["sortsync", "apply", "--url", "https://example.com/"])
            .unwrap();
        match cli.command {
            CliCommand::Apply { url, sort } => {
                assert_eq!(url, "https://example.com/");
                assert_eq!(sort, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_global_config_flag() {
        let cli = Cli::try_parse_from([
            "sortsync",
            "apply",
            "--url",
            "https://example.com/",
            "--config",
            "sync.toml",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("sync.toml")));
    }

    #[test]
    fn apply_requires_url() {
        let err = Cli::try_parse_from(["sortsync", "apply", "--sort", "name"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
