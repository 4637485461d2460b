//! Batch sorting of the samples of one descriptor.

use std::path::Path;

use indicatif::ProgressBar;

use crate::config::{FailurePolicy, OptionsConfig};
use crate::descriptor::SampleEntry;
use crate::error::Result;
use crate::fs::{copy_sample, CopyOutcome};
use crate::organize::state::BatchState;
use crate::output::{create_item_bar, print_success};
use crate::route::Router;

/// Route and copy every sample of a descriptor, in descriptor order.
///
/// With [`FailurePolicy::Abort`] the first failing sample ends the batch and
/// its error is returned. With [`FailurePolicy::Continue`] failures are
/// recorded in the returned state and the remaining samples are still sorted.
pub fn run_batch(
    descriptor: &Path,
    entries: &[SampleEntry],
    router: &Router,
    options: &OptionsConfig,
) -> Result<BatchState> {
    let mut state = BatchState::new(descriptor.to_path_buf());
    let bar = create_item_bar(entries.len() as u64, "Sorting");

    tracing::info!(
        "Sorting {} samples from {} (policy: {})",
        entries.len(),
        descriptor.display(),
        options.failure_policy
    );

    for entry in entries {
        if let Err(e) = process_entry(descriptor, entry, router, options, &mut state, &bar) {
            match options.failure_policy {
                FailurePolicy::Abort => {
                    bar.abandon();
                    return Err(e);
                }
                FailurePolicy::Continue => {
                    tracing::warn!("Failed to sort {}: {}", entry.path, e);
                    state.add_failure(&entry.path, e.to_string());
                }
            }
        }
        bar.inc(1);
    }

    bar.finish_and_clear();

    tracing::info!(
        "Batch complete: {} copied, {} skipped, {} failed",
        state.copied_count,
        state.skipped_count,
        state.failed_count()
    );

    Ok(state)
}

/// Route one sample and, unless this is a dry run, copy it.
fn process_entry(
    descriptor: &Path,
    entry: &SampleEntry,
    router: &Router,
    options: &OptionsConfig,
    state: &mut BatchState,
    bar: &ProgressBar,
) -> Result<()> {
    let result = router.route(descriptor, entry)?;

    if !options.dry_run {
        match copy_sample(&result.source, &result.destination, options.overwrite)? {
            CopyOutcome::Copied(bytes) => {
                state.add_copied(bytes);
                if options.show_copies {
                    bar.suspend(|| {
                        print_success(&format!(
                            "Sample copied to: {}",
                            result.destination.display()
                        ))
                    });
                }
            }
            CopyOutcome::Skipped => state.increment_skipped(),
        }
    }

    state.add_routed(result);
    Ok(())
}
