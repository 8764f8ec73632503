//! Greedy first-fit batch scheduler.
//!
//! # Algorithm
//!
//! 1. Sort jobs ascending by (priority, id).
//! 2. Scan left to right, growing the current batch while cumulative volume
//!    and item count stay within the constraints.
//! 3. When the next job does not fit, close the batch and start a new one
//!    with that job.
//! 4. A job that cannot fit even into an empty batch becomes a forced
//!    singleton, so the scan always advances.
//!
//! Batch duration is the slowest member's print time; total time is the
//! sum of batch durations.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for batching.

use tracing::{debug, instrument};

use crate::error::Result;
use crate::models::{Batch, Job, PrintPlan, PrinterConstraints};
use crate::validation::{validate_schedule_input, ValidationError};

/// Priority-ordered greedy batch scheduler.
///
/// # Example
///
/// ```
/// use u_batchcut::batching::BatchScheduler;
/// use u_batchcut::models::{Job, PrinterConstraints};
///
/// let jobs = vec![
///     Job::new("M1").with_volume(100.0).with_print_time(120),
///     Job::new("M2").with_volume(150.0).with_print_time(90),
///     Job::new("M3").with_volume(120.0).with_print_time(150),
/// ];
/// let constraints = PrinterConstraints::new(300.0, 2);
///
/// let plan = BatchScheduler::new().schedule(&jobs, &constraints).unwrap();
/// assert_eq!(plan.print_order, vec!["M1", "M2", "M3"]);
/// assert_eq!(plan.total_time, 270);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchScheduler;

impl BatchScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Validates the input and builds a print plan.
    ///
    /// # Errors
    /// [`Error::InvalidInput`](crate::Error::InvalidInput) if any job or the
    /// constraints fail validation, or if the total time overflows `u64`.
    #[instrument(skip(self, jobs, constraints), fields(
        jobs = jobs.len(),
        max_volume = constraints.max_volume,
        max_items = constraints.max_items
    ))]
    pub fn schedule(&self, jobs: &[Job], constraints: &PrinterConstraints) -> Result<PrintPlan> {
        validate_schedule_input(jobs, constraints)?;

        let sorted = sort_jobs(jobs);
        let plan = build_plan(&sorted, constraints).map_err(|e| vec![e])?;

        debug!(
            batches = plan.batch_count(),
            total_time = plan.total_time,
            "print plan built"
        );
        Ok(plan)
    }
}

/// Returns jobs sorted by (priority, id).
fn sort_jobs(jobs: &[Job]) -> Vec<&Job> {
    let mut sorted: Vec<&Job> = jobs.iter().collect();
    sorted.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id.cmp(&b.id)));
    sorted
}

fn build_plan(
    sorted: &[&Job],
    constraints: &PrinterConstraints,
) -> std::result::Result<PrintPlan, ValidationError> {
    let mut plan = PrintPlan::new();
    let mut current = Batch::new();

    for &job in sorted {
        if constraints.admits(current.volume + job.volume, current.len() + 1) {
            current.push(job);
            continue;
        }

        if !current.is_empty() {
            debug!(
                jobs = current.len(),
                volume = current.volume,
                duration = current.duration,
                "batch closed"
            );
            plan.add_batch(std::mem::take(&mut current))?;
        }

        if job.exceeds(constraints) {
            debug!(job = %job.id, volume = job.volume, "forced singleton batch");
            plan.add_batch(Batch::forced(job))?;
        } else {
            current.push(job);
        }
    }

    if !current.is_empty() {
        plan.add_batch(current)?;
    }
    Ok(plan)
}
