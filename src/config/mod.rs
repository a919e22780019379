#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "planet-vote")]
#[command(about = "Browse the planet gallery and vote for a planet")]
pub struct CliConfig {
    #[arg(long, help = "Planet server URL (default http://localhost:5000)")]
    pub base_url: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Directory the planet images are served from")]
    pub asset_base: Option<String>,

    #[arg(long, help = "Image file extension, without the dot")]
    pub asset_extension: Option<String>,

    #[arg(long, help = "Request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}
