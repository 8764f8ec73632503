//! Capacity-constrained batch scheduling and plan KPIs.
//!
//! Jobs are ordered by urgency and packed first-fit into batches that
//! respect a printer's volume and item limits. Jobs within a batch print
//! concurrently; batches print one after another.
//!
//! # Usage
//!
//! ```
//! use u_batchcut::batching::{optimize_printing, PlanKpi};
//! use u_batchcut::models::{Job, PrinterConstraints};
//!
//! let jobs = vec![
//!     Job::new("M1").with_volume(100.0).with_priority(2).with_print_time(120),
//!     Job::new("M2").with_volume(150.0).with_priority(1).with_print_time(90),
//!     Job::new("M3").with_volume(120.0).with_priority(3).with_print_time(150),
//! ];
//! let constraints = PrinterConstraints::new(300.0, 2);
//!
//! let plan = optimize_printing(&jobs, &constraints).unwrap();
//! assert_eq!(plan.print_order, vec!["M2", "M1", "M3"]);
//!
//! let kpi = PlanKpi::calculate(&plan, &jobs, &constraints);
//! assert_eq!(kpi.batch_count, 2);
//! ```
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3.2 (Batch Processing)

mod kpi;
mod scheduler;

pub use kpi::PlanKpi;
pub use scheduler::BatchScheduler;

use crate::error::Result;
use crate::models::{Job, PrintPlan, PrinterConstraints};

/// Builds a print plan with the default [`BatchScheduler`].
pub fn optimize_printing(jobs: &[Job], constraints: &PrinterConstraints) -> Result<PrintPlan> {
    BatchScheduler::new().schedule(jobs, constraints)
}
