use crate::storage::config::Config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "city-browser")]
#[command(about = "Browse cities by country, backed by a simulated cities service")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(flatten)]
    pub overrides: RuntimeOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

/// Per-invocation settings that take precedence over the config file
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct RuntimeOverrides {
    /// Load cities from this JSON document instead of the bundled one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Disable simulated random failures
    #[arg(long, global = true)]
    pub no_fail: bool,

    /// Simulated service latency in milliseconds
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl RuntimeOverrides {
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(data) = &self.data {
            config.data_path = Some(data.clone());
        }
        if self.no_fail {
            config.randomly_fail = false;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if self.no_color {
            config.colors = false;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the cities list
    List {
        /// Only show cities of this country
        #[arg(long)]
        country: Option<String>,
    },
    /// Show the countries available as filters
    Countries,
    /// Show a city's details
    Show {
        /// City ID
        id: String,
    },
    /// Browse cities interactively
    Browse,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}
