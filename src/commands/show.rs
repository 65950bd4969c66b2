//! Show command implementation
//!
//! Prints every alert in detailed, field-per-line format.

use crate::alerts::load_alerts;
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::cli::output::{print_output, AlertListing};
use crate::error::Result;

use super::triage_pipeline;

/// Execute the show command
pub fn run_show(args: &ShowArgs, format: OutputFormat) -> Result<()> {
    let batch = load_alerts(&args.input)?;
    let prepared = triage_pipeline(&batch, &args.filters);

    let listing = AlertListing::new(&prepared);
    print_output(&listing, format)?;

    Ok(())
}
