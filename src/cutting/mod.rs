//! Rod cutting optimization.
//!
//! Chooses piece lengths summing to a rod length so that the total sale
//! price is maximal. Two dynamic programs are provided:
//!
//! - [`rod_cutting_memo`]: top-down, memoized, ascending first-piece scan.
//!   Ties keep the first decomposition found.
//! - [`rod_cutting_table`]: bottom-up, descending first-piece scan.
//!   Ties keep the decomposition with fewer pieces.
//!
//! Both always return the same `max_profit`. The piece lists are each
//! variant's own choice among equally profitable decompositions and may
//! differ.
//!
//! # Usage
//!
//! ```
//! use u_batchcut::cutting::CuttingStrategy;
//! use u_batchcut::models::PriceTable;
//!
//! let prices = PriceTable::new(vec![2, 5, 7, 8, 10]);
//! let memo = CuttingStrategy::Memoized.solve(5, &prices).unwrap();
//! let table = CuttingStrategy::Tabulated.solve(5, &prices).unwrap();
//! assert_eq!(memo.max_profit, table.max_profit);
//! ```
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 15.1 (Rod Cutting)

mod memo;
mod table;

pub use memo::rod_cutting_memo;
pub use table::rod_cutting_table;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CutPlan, PriceTable};

/// Which dynamic program computes the cut plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuttingStrategy {
    /// Top-down with a per-call cache.
    Memoized,
    /// Bottom-up table.
    #[default]
    Tabulated,
}

impl CuttingStrategy {
    /// Strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            CuttingStrategy::Memoized => "memoized",
            CuttingStrategy::Tabulated => "tabulated",
        }
    }

    /// Computes the cut plan with this strategy.
    pub fn solve(&self, length: usize, prices: &PriceTable) -> Result<CutPlan> {
        match self {
            CuttingStrategy::Memoized => rod_cutting_memo(length, prices),
            CuttingStrategy::Tabulated => rod_cutting_table(length, prices),
        }
    }
}

/// Best decomposition of one remaining length.
///
/// Only the first piece is stored; the rest is the best decomposition of
/// `length - first_piece`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Subproblem {
    profit: i64,
    first_piece: usize,
    pieces: usize,
}

impl Subproblem {
    /// Zero-length rod: no pieces, no profit.
    const EMPTY: Self = Self {
        profit: 0,
        first_piece: 0,
        pieces: 0,
    };

    /// Prepends a piece of `length` sold at `price` to this decomposition.
    ///
    /// Returns `None` if the profit overflows.
    fn extend(&self, length: usize, price: i64) -> Option<Self> {
        Some(Self {
            profit: price.checked_add(self.profit)?,
            first_piece: length,
            pieces: self.pieces + 1,
        })
    }
}

/// Rebuilds the piece list by following first pieces down to zero.
fn reconstruct(length: usize, lookup: impl Fn(usize) -> Option<Subproblem>) -> Vec<usize> {
    let mut cuts = Vec::new();
    let mut remaining = length;
    while remaining > 0 {
        let Some(sub) = lookup(remaining)
            .filter(|sub| sub.first_piece > 0 && sub.first_piece <= remaining)
        else {
            debug_assert!(false, "no first piece recorded for length {remaining}");
            break;
        };
        cuts.push(sub.first_piece);
        remaining -= sub.first_piece;
    }
    cuts
}
