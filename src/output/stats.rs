//! Statistics reporting.

use console::style;
use serde::Serialize;

use crate::error::Result;
use crate::organize::{BatchState, FailedSample};
use crate::route::RoutingResult;

/// JSON shape of a routing plan.
#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    routed: &'a [RoutingResult],
    failures: &'a [FailedSample],
}

/// Print statistics for a finished batch.
pub fn print_batch_stats(state: &BatchState, dry_run: bool) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "{}",
        style(format!("Statistics for {}:", state.descriptor.display())).bold()
    );

    for (category, count) in &state.category_counts {
        println!("  {:<12} {}", category, count);
    }

    if dry_run {
        println!("  Planned:  {}", state.routed.len());
    } else {
        println!("  Copied:   {} ({} bytes)", state.copied_count, state.bytes_copied);
        println!("  Skipped:  {} (already present)", state.skipped_count);
    }

    if !state.failures.is_empty() {
        println!("  Failed:   {}", style(state.failed_count()).red());
        for failure in &state.failures {
            println!("    {}: {}", failure.sample_path, failure.message);
        }
    }
    println!("{}", style("═".repeat(50)).dim());
}

/// Print the routing plan, one line per sample.
pub fn print_plan(state: &BatchState) {
    for result in &state.routed {
        println!(
            "{} {} -> {}",
            style(&result.category).cyan(),
            result.source.display(),
            result.destination.display()
        );
    }
}

/// Render the routing plan, including failed samples, as JSON.
pub fn plan_json(state: &BatchState) -> Result<String> {
    let report = PlanReport {
        routed: &state.routed,
        failures: &state.failures,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Print the routing plan as JSON.
pub fn print_plan_json(state: &BatchState) -> Result<()> {
    println!("{}", plan_json(state)?);
    Ok(())
}
