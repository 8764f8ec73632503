//! Top-down memoized rod cutting.
//!
//! # Algorithm
//!
//! `profit(0) = 0`. For `n > 0`, try every first piece `i` in `1..=n`
//! (ascending) and keep the best `price[i] + profit(n - i)`. Only a strictly
//! greater candidate replaces the current best, so among equal profits the
//! smallest first piece wins.
//!
//! The recursion is driven by an explicit frame stack instead of the call
//! stack, so rod length is not limited by thread stack size. Each frame
//! resumes its scan where it left off once the missing subproblem is cached.
//!
//! # Complexity
//! O(N^2) time, O(N) cache entries.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::{reconstruct, Subproblem};
use crate::error::Result;
use crate::models::{CutPlan, PriceTable};
use crate::validation::{validate_cut_request, ValidationError};

/// Maximum-profit cut plan computed top-down with memoization.
///
/// # Errors
/// [`Error::InvalidInput`](crate::Error::InvalidInput) if the price table
/// has fewer than `length` entries, or if any candidate profit overflows
/// `i64`.
///
/// # Example
///
/// ```
/// use u_batchcut::cutting::rod_cutting_memo;
/// use u_batchcut::models::PriceTable;
///
/// let plan = rod_cutting_memo(3, &PriceTable::new(vec![1, 3, 8])).unwrap();
/// assert_eq!(plan.max_profit, 8);
/// assert_eq!(plan.cuts, vec![3]);
/// assert_eq!(plan.number_of_cuts, 0);
/// ```
#[instrument(skip(prices), fields(price_count = prices.max_length()))]
pub fn rod_cutting_memo(length: usize, prices: &PriceTable) -> Result<CutPlan> {
    validate_cut_request(length, prices)?;

    let mut memo = Memo::new(prices.as_slice());
    memo.solve(length).map_err(|e| vec![e])?;

    let profit = memo.get(length).map_or(0, |s| s.profit);
    let cuts = reconstruct(length, |n| memo.get(n));
    debug!(profit, subproblems = memo.cache.len(), "memoized cut plan");
    Ok(CutPlan::new(profit, cuts))
}

/// A suspended evaluation of `profit(length)`.
struct Frame {
    length: usize,
    next_piece: usize,
    best: Option<Subproblem>,
}

impl Frame {
    fn new(length: usize) -> Self {
        Self {
            length,
            next_piece: 1,
            best: None,
        }
    }
}

/// Per-call cache from remaining length to its best subproblem.
struct Memo<'a> {
    prices: &'a [i64],
    cache: HashMap<usize, Subproblem>,
}

impl<'a> Memo<'a> {
    fn new(prices: &'a [i64]) -> Self {
        Self {
            prices,
            cache: HashMap::new(),
        }
    }

    fn get(&self, length: usize) -> Option<Subproblem> {
        if length == 0 {
            Some(Subproblem::EMPTY)
        } else {
            self.cache.get(&length).copied()
        }
    }

    fn solve(&mut self, target: usize) -> std::result::Result<(), ValidationError> {
        if self.get(target).is_some() {
            return Ok(());
        }

        let mut stack = vec![Frame::new(target)];
        while let Some(frame) = stack.last_mut() {
            if frame.next_piece > frame.length {
                let length = frame.length;
                if let Some(best) = frame.best {
                    self.cache.insert(length, best);
                }
                stack.pop();
                continue;
            }

            let piece = frame.next_piece;
            let rest = frame.length - piece;
            match self.get(rest) {
                Some(sub) => {
                    let candidate = sub
                        .extend(piece, self.prices[piece - 1])
                        .ok_or_else(|| ValidationError::profit_overflow(frame.length))?;
                    if frame.best.map_or(true, |b| candidate.profit > b.profit) {
                        frame.best = Some(candidate);
                    }
                    frame.next_piece += 1;
                }
                None => stack.push(Frame::new(rest)),
            }
        }
        Ok(())
    }
}
