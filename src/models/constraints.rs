//! Printer capacity constraints.

use serde::{Deserialize, Serialize};

/// Per-batch capacity limits, fixed for one scheduling run.
///
/// A limit of zero is legal: every batch then degenerates into a forced
/// singleton so that scheduling still terminates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterConstraints {
    /// Maximum cumulative volume of a batch.
    pub max_volume: f64,
    /// Maximum number of jobs in a batch.
    pub max_items: usize,
}

impl PrinterConstraints {
    /// Creates a constraint set.
    pub fn new(max_volume: f64, max_items: usize) -> Self {
        Self {
            max_volume,
            max_items,
        }
    }

    /// Sets the volume limit.
    pub fn with_max_volume(mut self, max_volume: f64) -> Self {
        self.max_volume = max_volume;
        self
    }

    /// Sets the item limit.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Whether a batch of `count` jobs totalling `volume` fits.
    pub fn admits(&self, volume: f64, count: usize) -> bool {
        volume <= self.max_volume && count <= self.max_items
    }
}
