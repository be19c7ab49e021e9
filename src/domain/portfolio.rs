//! Portfolio holdings and return computation.

use chrono::NaiveDate;
use std::collections::HashMap;

use super::error::FolioError;
use super::returns;
use super::stock::Stock;

/// A set of stock holdings with integer share counts.
///
/// Share counts are not validated: negative counts model short holdings and
/// pass through the arithmetic unchanged. Because [`Stock`] identity is the
/// symbol alone, adding a holding for an already-held symbol overwrites its
/// share count; the originally inserted stock's history keeps serving as
/// the key.
#[derive(Debug, Clone, PartialEq)]
pub struct Portfolio {
    holdings: HashMap<Stock, i64>,
}

impl Portfolio {
    pub fn new(holdings: HashMap<Stock, i64>) -> Self {
        Portfolio { holdings }
    }

    pub fn empty() -> Self {
        Portfolio {
            holdings: HashMap::new(),
        }
    }

    pub fn add_holding(&mut self, stock: Stock, shares: i64) {
        self.holdings.insert(stock, shares);
    }

    pub fn has_holding(&self, symbol: &str) -> bool {
        self.holdings.keys().any(|s| s.symbol() == symbol)
    }

    pub fn shares_of(&self, symbol: &str) -> Option<i64> {
        self.holdings
            .iter()
            .find(|(s, _)| s.symbol() == symbol)
            .map(|(_, &shares)| shares)
    }

    pub fn holding_count(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Total value of all holdings on `date`: Σ price(date)·shares.
    ///
    /// Fails with [`FolioError::MissingPrice`] if any held stock has no price
    /// recorded for exactly that date. No partial aggregate is returned.
    pub fn value_at(&self, date: NaiveDate) -> Result<f64, FolioError> {
        let mut total = 0.0;
        for (stock, &shares) in &self.holdings {
            let price = stock
                .price(date)
                .ok_or_else(|| FolioError::MissingPrice {
                    symbol: stock.symbol().to_string(),
                    date,
                })?;
            total += price * shares as f64;
        }
        Ok(total)
    }

    /// End value minus start value across all holdings.
    pub fn profit(&self, start: NaiveDate, end: NaiveDate) -> Result<f64, FolioError> {
        Ok(self.value_at(end)? - self.value_at(start)?)
    }

    /// Compound yearly rate implied by the total return from `start` to `end`,
    /// over a fixed 365-day year.
    ///
    /// Fails when any price is missing, when the period is zero-length, when
    /// the start value is zero, or when the implied rate has no real value.
    pub fn annualized_return(&self, start: NaiveDate, end: NaiveDate) -> Result<f64, FolioError> {
        let start_value = self.value_at(start)?;
        let end_value = self.value_at(end)?;
        if start_value == 0.0 {
            return Err(FolioError::ZeroStartValue { date: start });
        }
        let total_return = (end_value - start_value) / start_value;
        returns::annualize(total_return, returns::year_fraction(start, end))
    }
}
