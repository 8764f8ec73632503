//! Rod cutting models: price table and cut plan.

use serde::{Deserialize, Serialize};

/// Sale prices indexed by piece length.
///
/// `prices[i]` is the price of a piece of length `i + 1`. Entries beyond the
/// requested rod length are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: Vec<i64>,
}

impl PriceTable {
    /// Creates a price table from per-length prices.
    pub fn new(prices: impl Into<Vec<i64>>) -> Self {
        Self {
            prices: prices.into(),
        }
    }

    /// Price of a piece of the given length, if listed.
    #[inline]
    pub fn price(&self, length: usize) -> Option<i64> {
        length
            .checked_sub(1)
            .and_then(|idx| self.prices.get(idx).copied())
    }

    /// Longest piece length with a listed price.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.prices.len()
    }

    /// Underlying prices.
    pub fn as_slice(&self) -> &[i64] {
        &self.prices
    }
}

impl From<Vec<i64>> for PriceTable {
    fn from(prices: Vec<i64>) -> Self {
        Self::new(prices)
    }
}

/// An optimal cut decomposition.
///
/// `cuts` lists piece lengths in cutting order and sums to the rod length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutPlan {
    /// Total sale price of all pieces.
    pub max_profit: i64,
    /// Piece lengths.
    pub cuts: Vec<usize>,
    /// Cuts needed to produce the pieces (`cuts.len() - 1`, or 0).
    pub number_of_cuts: usize,
}

impl CutPlan {
    /// Creates a plan from its pieces, deriving the cut count.
    pub fn new(max_profit: i64, cuts: Vec<usize>) -> Self {
        let number_of_cuts = cuts.len().saturating_sub(1);
        Self {
            max_profit,
            cuts,
            number_of_cuts,
        }
    }

    /// Total length covered by the pieces.
    pub fn total_length(&self) -> usize {
        self.cuts.iter().sum()
    }

    /// Number of pieces.
    pub fn piece_count(&self) -> usize {
        self.cuts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_lookup() {
        let prices = PriceTable::new(vec![2, 5, 7]);
        assert_eq!(prices.price(0), None);
        assert_eq!(prices.price(1), Some(2));
        assert_eq!(prices.price(3), Some(7));
        assert_eq!(prices.price(4), None);
        assert_eq!(prices.max_length(), 3);
    }

    #[test]
    fn test_price_table_from_vec() {
        let prices = PriceTable::from(vec![4, 9]);
        assert_eq!(prices, PriceTable::new(&[4, 9][..]));
        assert_eq!(prices.price(2), Some(9));
    }

    #[test]
    fn test_cut_plan_counts() {
        let plan = CutPlan::new(12, vec![1, 2, 2]);
        assert_eq!(plan.number_of_cuts, 2);
        assert_eq!(plan.total_length(), 5);
        assert_eq!(plan.piece_count(), 3);

        let whole = CutPlan::new(8, vec![3]);
        assert_eq!(whole.number_of_cuts, 0);

        let empty = CutPlan::new(0, Vec::new());
        assert_eq!(empty.number_of_cuts, 0);
        assert_eq!(empty.total_length(), 0);
    }

    #[test]
    fn test_price_table_from_json() {
        let prices: PriceTable = serde_json::from_str("[1, 3, 8]").unwrap();
        assert_eq!(prices.as_slice(), &[1, 3, 8]);
    }
}
