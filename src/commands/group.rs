//! Group command implementation
//!
//! Partitions a scored batch by a field and prints the groups.

use crate::alerts::load_alerts;
use crate::cli::args::{GroupArgs, OutputFormat};
use crate::cli::output::{print_output, GroupReport};
use crate::error::Result;
use crate::triage::group;

use super::triage_pipeline;

/// Execute the group command
pub fn run_group(args: &GroupArgs, format: OutputFormat) -> Result<()> {
    let batch = load_alerts(&args.input)?;
    let prepared = triage_pipeline(&batch, &args.filters);

    let field = args.by.name();
    let groups = group::by_field(&prepared, field);

    let report = GroupReport::new(field, groups);
    print_output(&report, format)?;

    Ok(())
}
