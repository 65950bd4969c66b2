//! Triage command implementation
//!
//! Scores and ranks a batch, printing the highest-priority alerts with
//! summary statistics.

use crate::alerts::load_alerts;
use crate::cli::args::{OutputFormat, TriageArgs};
use crate::cli::output::{print_output, Message, TriageReport};
use crate::config::Config;
use crate::error::Result;

use super::triage_pipeline;

/// Execute the triage command
pub fn run_triage(args: &TriageArgs, format: OutputFormat, config: &Config) -> Result<()> {
    let batch = load_alerts(&args.input)?;
    log::info!("Loaded {} alerts from {}", batch.len(), args.input);

    let prepared = triage_pipeline(&batch, &args.filters);

    if prepared.is_empty() {
        if let Some(minutes) = args.filters.last_minutes {
            let msg = Message {
                message: format!("No alerts found in the last {} minutes", minutes),
                success: false,
            };
            print_output(&msg, format)?;
            return Ok(());
        }
    }

    let report = TriageReport::new(
        &prepared,
        config.display.limit,
        args.filters.last_minutes,
        config.display.show_stats,
    );

    print_output(&report, format)?;

    Ok(())
}
