//! Input validation for batching and cutting problems.
//!
//! Checks the integrity of jobs, printer constraints, and cut requests
//! before any algorithm runs. Every detected issue is collected rather
//! than stopping at the first one. Detects:
//! - Empty or duplicate job IDs
//! - Negative or non-finite volumes
//! - Priorities below 1
//! - Negative or non-numeric volume limits
//! - Price tables shorter than the requested rod length
//!
//! Arithmetic overflow (`ProfitOverflow`, `TimeOverflow`) is only detectable
//! while solving and is reported by the algorithms themselves.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Job, PriceTable, PrinterConstraints};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A job has an empty identifier.
    EmptyId,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job volume is negative, NaN, or infinite.
    InvalidVolume,
    /// A job priority is below 1.
    InvalidPriority,
    /// The volume limit is negative or NaN.
    InvalidCapacity,
    /// The price table does not cover the requested rod length.
    PriceTableTooShort,
    /// A cut plan's profit does not fit in an `i64`.
    ProfitOverflow,
    /// The plan's total print time does not fit in a `u64`.
    TimeOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Profit of some decomposition of `length` overflows.
    pub(crate) fn profit_overflow(length: usize) -> Self {
        Self::new(
            ValidationErrorKind::ProfitOverflow,
            format!("Profit for rod length {length} overflows i64"),
        )
    }

    /// Adding a batch of `duration` to `total` overflows.
    pub(crate) fn time_overflow(total: u64, duration: u64) -> Self {
        Self::new(
            ValidationErrorKind::TimeOverflow,
            format!("Total print time {total} + {duration} overflows u64"),
        )
    }
}

/// Validates a job list.
///
/// Checks:
/// 1. No empty job IDs
/// 2. No duplicate job IDs
/// 3. Volumes are finite and non-negative
/// 4. Priorities are at least 1
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for job in jobs {
        if job.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                "Job with empty ID",
            ));
        } else if !ids.insert(job.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        if !job.volume.is_finite() || job.volume < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidVolume,
                format!("Job '{}' has invalid volume {}", job.id, job.volume),
            ));
        }

        if job.priority < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPriority,
                format!(
                    "Job '{}' has priority {} (must be at least 1)",
                    job.id, job.priority
                ),
            ));
        }
    }

    into_result(errors)
}

/// Validates printer constraints.
///
/// Zero limits are accepted: they force every batch into a singleton.
/// An infinite volume limit means "unbounded".
pub fn validate_constraints(constraints: &PrinterConstraints) -> ValidationResult {
    if constraints.max_volume.is_nan() || constraints.max_volume < 0.0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidCapacity,
            format!("Invalid max_volume {}", constraints.max_volume),
        )]);
    }
    Ok(())
}

/// Validates a complete scheduling request (jobs and constraints).
pub fn validate_schedule_input(jobs: &[Job], constraints: &PrinterConstraints) -> ValidationResult {
    let mut errors = validate_jobs(jobs).err().unwrap_or_default();
    errors.extend(validate_constraints(constraints).err().unwrap_or_default());
    into_result(errors)
}

/// Validates a rod cutting request.
///
/// The price table must list a price for every length up to `length`.
pub fn validate_cut_request(length: usize, prices: &PriceTable) -> ValidationResult {
    if prices.max_length() < length {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::PriceTableTooShort,
            format!(
                "Rod length {} needs {} prices, got {}",
                length,
                length,
                prices.max_length()
            ),
        )]);
    }
    Ok(())
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
