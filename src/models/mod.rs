//! Domain models.
//!
//! Plain immutable value records for both problem families: print jobs and
//! their batches, and rod price tables with their cut plans.
//!
//! | Type | Role |
//! |------|------|
//! | `Job` | One queued print job |
//! | `PrinterConstraints` | Per-batch volume and item limits |
//! | `Batch` | Jobs printed together |
//! | `PrintPlan` | Print order, total time, batches |
//! | `PriceTable` | Price per piece length |
//! | `CutPlan` | Profit and piece lengths |

mod constraints;
mod cut;
mod job;
mod plan;

pub use constraints::PrinterConstraints;
pub use cut::{CutPlan, PriceTable};
pub use job::Job;
pub use plan::{Batch, PrintPlan};
