use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bed-finder")]
#[command(about = "Find nearby hospitals with free beds and reach the team behind it")]
pub struct CliConfig {
    /// TOML file with backend and estimator settings. Without it, only the built-in list is shown.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, value_enum, default_value = "compact")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List hospitals with distance, travel time and bed status.
    List {
        /// Only show hospitals within this many kilometres.
        #[arg(long)]
        radius_km: Option<f64>,

        /// Average travel speed used for the time estimate.
        #[arg(long)]
        speed_kmh: Option<f64>,

        /// Print the listing as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Send a message through the contact form.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}
