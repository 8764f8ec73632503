//! Print job model.
//!
//! A job is one item waiting in the print queue. Jobs are immutable once
//! submitted; the scheduler only reads them.

use serde::{Deserialize, Serialize};

use super::PrinterConstraints;

/// A job to be placed into a batch.
///
/// # Priority Convention
/// **Lower priority value = more urgent.** Priority 1 is printed before
/// priority 2. Values below 1 are rejected by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier. Also the tie-breaker among equal priorities.
    pub id: String,
    /// Volume occupied in the printer (non-negative, finite).
    pub volume: f64,
    /// Urgency (lower = more urgent, minimum 1).
    pub priority: i32,
    /// Processing time of this job alone.
    pub print_time: u64,
}

impl Job {
    /// Creates a job with zero volume, priority 1 and zero print time.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            volume: 0.0,
            priority: 1,
            print_time: 0,
        }
    }

    /// Sets the volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the processing time.
    pub fn with_print_time(mut self, print_time: u64) -> Self {
        self.print_time = print_time;
        self
    }

    /// Whether this job alone already violates the given constraints.
    pub fn exceeds(&self, constraints: &PrinterConstraints) -> bool {
        !constraints.admits(self.volume, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("M1")
            .with_volume(100.0)
            .with_priority(2)
            .with_print_time(120);

        assert_eq!(job.id, "M1");
        assert_eq!(job.volume, 100.0);
        assert_eq!(job.priority, 2);
        assert_eq!(job.print_time, 120);
    }

    #[test]
    fn test_job_defaults() {
        let job = Job::new("J");
        assert_eq!(job.volume, 0.0);
        assert_eq!(job.priority, 1);
        assert_eq!(job.print_time, 0);
    }

    #[test]
    fn test_job_exceeds() {
        let constraints = PrinterConstraints::new(300.0, 2);
        assert!(!Job::new("a").with_volume(300.0).exceeds(&constraints));
        assert!(Job::new("b").with_volume(300.5).exceeds(&constraints));
        assert!(Job::new("c").exceeds(&PrinterConstraints::new(300.0, 0)));
    }

    #[test]
    fn test_job_from_json() {
        let job: Job = serde_json::from_str(
            r#"{"id": "M2", "volume": 150, "priority": 1, "print_time": 90}"#,
        )
        .unwrap();
        assert_eq!(job, Job::new("M2").with_volume(150.0).with_print_time(90));
    }
}
