//! Capacity-constrained batch scheduling and rod-cutting optimization.
//!
//! Two independent, synchronous optimizers over plain value records.
//! Every call owns its working state; nothing is cached between calls.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `PrinterConstraints`, `Batch`,
//!   `PrintPlan`, `PriceTable`, `CutPlan`
//! - **`batching`**: Greedy priority-ordered batch scheduler and plan KPIs
//! - **`cutting`**: Rod cutting, memoized (top-down) and tabulated (bottom-up)
//! - **`validation`**: Input integrity checks (IDs, volumes, priorities, price coverage)
//! - **`error`**: Crate error type
//!
//! # Logging
//!
//! Entry points emit `tracing` spans and events. The crate never installs
//! a subscriber; that is left to the application.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15

pub mod batching;
pub mod cutting;
pub mod error;
pub mod models;
pub mod validation;

pub use batching::optimize_printing;
pub use cutting::{rod_cutting_memo, rod_cutting_table};
pub use error::{Error, Result};
