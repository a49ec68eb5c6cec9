//! Runtime configuration for the selector search CLI.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::search::SearchOptions;

/// Upper limit on `--workers`; each worker is an OS thread.
pub const MAX_WORKERS: usize = 1024;

/// Function Selector Golf
///
/// Finds function names whose 4-byte selector starts with zero bytes.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search for a selector with leading zero bytes
    Search(SearchArgs),

    /// Derive the Ethereum address of a private key
    Address {
        /// Private key as 64 hex characters (0x prefix optional)
        private_key: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Signature template, e.g. "mint%d(uint256,address)" or "balanceOf(address)"
    pub signature: String,

    /// Number of worker threads (default: number of CPU cores)
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Exclusive upper bound on placeholder values
    #[arg(short = 'm', long, default_value_t = u64::MAX)]
    pub max_index: u64,

    /// Progress report interval in seconds
    #[arg(short = 'r', long, default_value = "5")]
    pub report_interval: u64,
}

impl SearchArgs {
    /// Returns the number of workers, defaulting to CPU count
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            workers: self.worker_count(),
            max_index: self.max_index,
            report_interval: Duration::from_secs(self.report_interval),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.worker_count() == 0 {
            return Err(ConfigError::InvalidConfig(
                "workers must be at least 1".into(),
            ));
        }
        if self.worker_count() > MAX_WORKERS {
            return Err(ConfigError::InvalidConfig(format!(
                "workers cannot exceed {}",
                MAX_WORKERS
            )));
        }
        if self.max_index == 0 {
            return Err(ConfigError::InvalidConfig(
                "max index must be at least 1".into(),
            ));
        }
        if self.report_interval == 0 {
            return Err(ConfigError::InvalidConfig(
                "report interval must be at least 1 second".into(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.command {
            Command::Search(args) => args.validate(),
            Command::Address { private_key } => {
                if private_key.trim().is_empty() {
                    return Err(ConfigError::InvalidConfig(
                        "private key cannot be empty".into(),
                    ));
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("selector_golf").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_search_defaults() {
        let config = parse(&["search", "mint(uint256)"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level, "info");

        let Command::Search(args) = config.command else {
            panic!("expected search command");
        };
        let options = args.to_options();
        assert_eq!(options.max_index, u64::MAX);
        assert_eq!(options.report_interval, Duration::from_secs(5));
        assert_eq!(options.workers, num_cpus::get());
    }

    #[test]
    fn test_search_flags() {
        let config = parse(&["search", "mint%d(uint256)", "-w", "3", "-m", "2000", "--log-level", "debug"]);
        assert_eq!(config.log_level, "debug");
        let Command::Search(args) = config.command else {
            panic!("expected search command");
        };
        assert_eq!(args.signature, "mint%d(uint256)");
        assert_eq!(args.to_options().workers, 3);
        assert_eq!(args.to_options().max_index, 2000);
    }

    #[test]
    fn test_invalid_search_flags() {
        assert!(parse(&["search", "f()", "-w", "0"]).validate().is_err());
        assert!(parse(&["search", "f()", "-m", "0"]).validate().is_err());
        assert!(parse(&["search", "f()", "-r", "0"]).validate().is_err());
    }

    #[test]
    fn test_worker_cap() {
        assert!(parse(&["search", "f()", "-w", "1024"]).validate().is_ok());
        assert!(parse(&["search", "f()", "-w", "1025"]).validate().is_err());
        assert!(parse(&["search", "f()", "-w", "100000"]).validate().is_err());
    }

    #[test]
    fn test_address_command() {
        let config = parse(&["address", "0x01"]);
        assert!(config.validate().is_ok());
        assert!(matches!(config.command, Command::Address { .. }));
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Config::try_parse_from(["selector_golf"]).is_err());
    }
}
