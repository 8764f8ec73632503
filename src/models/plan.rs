//! Print plan (solution) model.
//!
//! A plan is the ordered list of batches produced by one scheduling run,
//! flattened into a print order plus the total processing time.

use serde::{Deserialize, Serialize};

use super::Job;
use crate::validation::ValidationError;

/// A group of jobs printed together.
///
/// Jobs in a batch print concurrently, so the batch lasts as long as its
/// slowest member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Member job IDs in print order.
    pub job_ids: Vec<String>,
    /// Cumulative member volume.
    pub volume: f64,
    /// Maximum member processing time.
    pub duration: u64,
    /// Whether this is a lone job that violates the constraints by itself.
    pub forced: bool,
}

impl Batch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a forced singleton holding one job.
    pub fn forced(job: &Job) -> Self {
        let mut batch = Self::new();
        batch.push(job);
        batch.forced = true;
        batch
    }

    /// Appends a job, updating volume and duration.
    pub fn push(&mut self, job: &Job) {
        self.job_ids.push(job.id.clone());
        self.volume += job.volume;
        self.duration = self.duration.max(job.print_time);
    }

    /// Number of jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.job_ids.len()
    }

    /// Whether the batch holds no jobs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }
}

/// Result of a scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintPlan {
    /// Job IDs in the order they are printed.
    pub print_order: Vec<String>,
    /// Sum of batch durations.
    pub total_time: u64,
    /// Batches in print order.
    pub batches: Vec<Batch>,
}

impl PrintPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a closed batch.
    ///
    /// The plan is left unchanged if the total time would overflow.
    pub fn add_batch(&mut self, batch: Batch) -> Result<(), ValidationError> {
        self.total_time = self
            .total_time
            .checked_add(batch.duration)
            .ok_or_else(|| ValidationError::time_overflow(self.total_time, batch.duration))?;
        self.print_order.extend(batch.job_ids.iter().cloned());
        self.batches.push(batch);
        Ok(())
    }

    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.print_order.len()
    }

    /// Finds the batch containing a job, returning its index.
    pub fn batch_of(&self, job_id: &str) -> Option<usize> {
        self.batches
            .iter()
            .position(|b| b.job_ids.iter().any(|id| id == job_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_batch_push_tracks_volume_and_duration() {
        let mut batch = Batch::new();
        batch.push(&Job::new("M1").with_volume(100.0).with_print_time(120));
        batch.push(&Job::new("M2").with_volume(150.0).with_print_time(90));

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.volume, 250.0);
        assert_eq!(batch.duration, 120);
        assert!(!batch.forced);
    }

    #[test]
    fn test_forced_singleton() {
        let batch = Batch::forced(&Job::new("big").with_volume(999.0).with_print_time(7));
        assert_eq!(batch.job_ids, vec!["big"]);
        assert_eq!(batch.duration, 7);
        assert!(batch.forced);
    }

    #[test]
    fn test_plan_add_batch() {
        let mut first = Batch::new();
        first.push(&Job::new("A").with_print_time(10));
        first.push(&Job::new("B").with_print_time(30));
        let second = Batch::forced(&Job::new("C").with_print_time(5));

        let mut plan = PrintPlan::new();
        plan.add_batch(first).unwrap();
        plan.add_batch(second).unwrap();

        assert_eq!(plan.print_order, vec!["A", "B", "C"]);
        assert_eq!(plan.total_time, 35);
        assert_eq!(plan.batch_count(), 2);
        assert_eq!(plan.job_count(), 3);
        assert_eq!(plan.batch_of("B"), Some(0));
        assert_eq!(plan.batch_of("C"), Some(1));
        assert_eq!(plan.batch_of("Z"), None);
    }

    #[test]
    fn test_add_batch_overflow_leaves_plan_unchanged() {
        let mut plan = PrintPlan::new();
        plan.add_batch(Batch::forced(&Job::new("A").with_print_time(u64::MAX)))
            .unwrap();

        let err = plan
            .add_batch(Batch::forced(&Job::new("B").with_print_time(1)))
            .unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TimeOverflow);
        assert_eq!(plan.total_time, u64::MAX);
        assert_eq!(plan.print_order, vec!["A"]);
        assert_eq!(plan.batch_count(), 1);
    }
}
