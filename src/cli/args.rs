//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Alert triage tool
///
/// Score, filter, sort, and group batches of monitoring alerts.
#[derive(Parser, Debug)]
#[command(name = "alertctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ALERTCTL_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank alerts, showing the highest-priority ones first
    Triage(TriageArgs),

    /// Show every alert in detailed format
    Show(ShowArgs),

    /// Group alerts by a field
    Group(GroupArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the triage command
#[derive(Parser, Debug)]
pub struct TriageArgs {
    /// Input JSON file containing alerts
    #[arg(short, long)]
    pub input: String,

    /// Maximum number of alerts to display (overrides config)
    #[arg(short, long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Input JSON file containing alerts
    #[arg(short, long)]
    pub input: String,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the group command
#[derive(Parser, Debug)]
pub struct GroupArgs {
    /// Input JSON file containing alerts
    #[arg(short, long)]
    pub input: String,

    /// Field to group by
    #[arg(long = "by", value_enum)]
    pub by: GroupFieldArg,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Filter flags shared by all data subcommands
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Keep only alerts from the last N minutes
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub last_minutes: Option<u64>,

    /// Keep only alerts with this exact severity label
    #[arg(long)]
    pub severity: Option<String>,

    /// Keep only alerts from this service
    #[arg(long)]
    pub service: Option<String>,
}

/// Group field argument
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum GroupFieldArg {
    /// Group by alert severity
    Severity,
    /// Group by service name
    Service,
    /// Group by component name
    Component,
    /// Group by metric name
    Metric,
    /// Group by threshold value
    Threshold,
    /// Group by observed value
    Value,
    /// Group by computed priority score
    Priority,
}

impl GroupFieldArg {
    /// Field name as the grouping engine expects it
    pub fn name(&self) -> &'static str {
        match self {
            Self::Severity => "severity",
            Self::Service => "service",
            Self::Component => "component",
            Self::Metric => "metric",
            Self::Threshold => "threshold",
            Self::Value => "value",
            Self::Priority => "priority",
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
