use crate::core::grouping::group;
use crate::core::maximizer::best_pair;
use crate::domain::model::{RawRecord, ResultSet, RunOptions, TransformResult};
use crate::utils::error::Result;

/// Runs grouping and per-project maximization over one dataset.
///
/// Results follow the order in which each project first appears in `records`.
/// Projects without a positive-overlap pair are left out; an empty result is not an error.
pub fn run(records: &[RawRecord], options: &RunOptions) -> Result<ResultSet> {
    Ok(run_with_summary(records, options)?.results)
}

pub fn run_with_summary(records: &[RawRecord], options: &RunOptions) -> Result<TransformResult> {
    let grouped = group(records, options)?;
    let mut results = ResultSet::new();

    for (project_id, intervals) in grouped.groups.iter() {
        match best_pair(project_id, intervals) {
            Some(pair) => {
                tracing::debug!(
                    "Project {}: {} intervals, best pair {} & {} ({} days)",
                    project_id,
                    intervals.len(),
                    pair.employee_id_1,
                    pair.employee_id_2,
                    pair.days_overlap
                );
                results.push(pair);
            }
            None => {
                tracing::debug!(
                    "Project {}: {} intervals, no overlapping pair",
                    project_id,
                    intervals.len()
                );
            }
        }
    }

    tracing::info!(
        "Processed {} records across {} projects: {} pairs found, {} rows skipped",
        records.len(),
        grouped.groups.len(),
        results.len(),
        grouped.skipped_rows
    );

    Ok(TransformResult {
        results,
        records_read: records.len(),
        skipped_rows: grouped.skipped_rows,
        project_count: grouped.groups.len(),
    })
}
