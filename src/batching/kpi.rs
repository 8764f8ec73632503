//! Print plan quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Batch Count | Number of batches |
//! | Forced Singletons | Batches holding one job that violates the limits alone |
//! | Avg Batch Size | Mean jobs per batch |
//! | Avg Fill Rate | Mean batch volume / max volume |
//! | Serial Time | Sum of every job's print time (one job at a time) |
//! | Time Saved | Serial time - total plan time |

use crate::models::{Job, PrintPlan, PrinterConstraints};

/// Print plan performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanKpi {
    /// Number of batches.
    pub batch_count: usize,
    /// Number of forced singleton batches.
    pub forced_singletons: usize,
    /// Mean jobs per batch.
    pub avg_batch_size: f64,
    /// Mean volume fill rate (0.0..1.0 for non-forced batches).
    /// `None` when the volume limit is zero or unbounded.
    pub avg_fill_rate: Option<f64>,
    /// Time to print every job on its own, saturating at `u64::MAX`.
    pub serial_time: u64,
    /// Time saved by batching compared to serial printing.
    pub time_saved: u64,
}

impl PlanKpi {
    /// Computes KPIs from a plan, its input jobs, and the constraints used.
    pub fn calculate(plan: &PrintPlan, jobs: &[Job], constraints: &PrinterConstraints) -> Self {
        let batch_count = plan.batch_count();
        let forced_singletons = plan.batches.iter().filter(|b| b.forced).count();

        let avg_batch_size = if batch_count == 0 {
            0.0
        } else {
            plan.job_count() as f64 / batch_count as f64
        };

        let avg_fill_rate = if batch_count == 0
            || constraints.max_volume <= 0.0
            || !constraints.max_volume.is_finite()
        {
            None
        } else {
            let sum: f64 = plan
                .batches
                .iter()
                .map(|b| b.volume / constraints.max_volume)
                .sum();
            Some(sum / batch_count as f64)
        };

        let serial_time = jobs
            .iter()
            .fold(0u64, |acc, j| acc.saturating_add(j.print_time));

        Self {
            batch_count,
            forced_singletons,
            avg_batch_size,
            avg_fill_rate,
            serial_time,
            time_saved: serial_time.saturating_sub(plan.total_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batching::optimize_printing;

    #[test]
    fn test_kpi_basic() {
        let jobs = vec![
            Job::new("M1").with_volume(100.0).with_print_time(120),
            Job::new("M2").with_volume(150.0).with_print_time(90),
            Job::new("M3").with_volume(120.0).with_print_time(150),
        ];
        let constraints = PrinterConstraints::new(300.0, 2);
        let plan = optimize_printing(&jobs, &constraints).unwrap();

        let kpi = PlanKpi::calculate(&plan, &jobs, &constraints);
        assert_eq!(kpi.batch_count, 2);
        assert_eq!(kpi.forced_singletons, 0);
        assert!((kpi.avg_batch_size - 1.5).abs() < 1e-10);
        // (250/300 + 120/300) / 2
        let fill = kpi.avg_fill_rate.unwrap();
        assert!((fill - 370.0 / 600.0).abs() < 1e-10);
        assert_eq!(kpi.serial_time, 360);
        assert_eq!(kpi.time_saved, 90);
    }

    #[test]
    fn test_kpi_forced_singletons() {
        let jobs = vec![
            Job::new("A").with_volume(50.0).with_print_time(10),
            Job::new("B").with_volume(50.0).with_print_time(10),
        ];
        let constraints = PrinterConstraints::new(10.0, 4);
        let plan = optimize_printing(&jobs, &constraints).unwrap();

        let kpi = PlanKpi::calculate(&plan, &jobs, &constraints);
        assert_eq!(kpi.forced_singletons, 2);
        assert_eq!(kpi.time_saved, 0);
    }

    #[test]
    fn test_kpi_serial_time_saturates() {
        let jobs = vec![
            Job::new("A").with_volume(1.0).with_print_time(u64::MAX),
            Job::new("B").with_volume(1.0).with_print_time(5),
        ];
        let constraints = PrinterConstraints::new(10.0, 2);
        let plan = optimize_printing(&jobs, &constraints).unwrap();

        let kpi = PlanKpi::calculate(&plan, &jobs, &constraints);
        assert_eq!(kpi.serial_time, u64::MAX);
        assert_eq!(kpi.time_saved, 0);
    }

    #[test]
    fn test_kpi_empty() {
        let constraints = PrinterConstraints::new(300.0, 2);
        let kpi = PlanKpi::calculate(&PrintPlan::new(), &[], &constraints);
        assert_eq!(kpi.batch_count, 0);
        assert_eq!(kpi.avg_batch_size, 0.0);
        assert_eq!(kpi.avg_fill_rate, None);
        assert_eq!(kpi.serial_time, 0);
    }

    #[test]
    fn test_kpi_unbounded_volume() {
        let jobs = vec![Job::new("A").with_volume(5.0).with_print_time(3)];
        let constraints = PrinterConstraints::new(f64::INFINITY, 1);
        let plan = optimize_printing(&jobs, &constraints).unwrap();
        let kpi = PlanKpi::calculate(&plan, &jobs, &constraints);
        assert_eq!(kpi.avg_fill_rate, None);
    }
}
