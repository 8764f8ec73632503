//! Bottom-up tabulated rod cutting.
//!
//! # Algorithm
//!
//! Fill `table[0..=N]` in increasing length. For length `i`, scan first
//! pieces `j` from `i` down to 1 and evaluate `price[j] + table[i - j]`.
//! A strictly greater profit replaces the best; an equal profit replaces it
//! only when it needs fewer pieces.
//!
//! Each row stores profit, first piece and piece count; the cut list is
//! rebuilt by following first pieces.
//!
//! # Complexity
//! O(N^2) time, O(N) space.

use tracing::{debug, instrument, trace};

use super::{reconstruct, Subproblem};
use crate::error::Result;
use crate::models::{CutPlan, PriceTable};
use crate::validation::{validate_cut_request, ValidationError};

/// Maximum-profit cut plan computed bottom-up.
///
/// Always agrees with [`rod_cutting_memo`](super::rod_cutting_memo) on
/// `max_profit`; the piece list may differ when several decompositions tie.
///
/// # Errors
/// [`Error::InvalidInput`](crate::Error::InvalidInput) if the price table
/// has fewer than `length` entries, or if any candidate profit overflows
/// `i64`.
///
/// # Example
///
/// ```
/// use u_batchcut::cutting::rod_cutting_table;
/// use u_batchcut::models::PriceTable;
///
/// let plan = rod_cutting_table(5, &PriceTable::new(vec![2, 5, 7, 8, 10])).unwrap();
/// assert_eq!(plan.max_profit, 12);
/// assert_eq!(plan.cuts.iter().sum::<usize>(), 5);
/// ```
#[instrument(skip(prices), fields(price_count = prices.max_length()))]
pub fn rod_cutting_table(length: usize, prices: &PriceTable) -> Result<CutPlan> {
    validate_cut_request(length, prices)?;

    let prices = prices.as_slice();
    let mut table = vec![Subproblem::EMPTY; length + 1];

    for i in 1..=length {
        let mut best: Option<Subproblem> = None;
        for j in (1..=i.min(prices.len())).rev() {
            let candidate = table[i - j]
                .extend(j, prices[j - 1])
                .ok_or_else(|| vec![ValidationError::profit_overflow(i)])?;
            best = Some(match best {
                Some(current) if prefer(&candidate, &current) => candidate,
                Some(current) => current,
                None => candidate,
            });
        }
        if let Some(best) = best {
            trace!(
                length = i,
                profit = best.profit,
                first_piece = best.first_piece,
                "table row"
            );
            table[i] = best;
        }
    }

    let profit = table[length].profit;
    let cuts = reconstruct(length, |n| table.get(n).copied());
    debug!(profit, "tabulated cut plan");
    Ok(CutPlan::new(profit, cuts))
}

/// Higher profit wins; on equal profit, fewer pieces win.
fn prefer(candidate: &Subproblem, current: &Subproblem) -> bool {
    candidate.profit > current.profit
        || (candidate.profit == current.profit && candidate.pieces < current.pieces)
}
