//! Price data access port trait.

use crate::domain::error::FolioError;
use crate::domain::stock::PricePoint;
use chrono::NaiveDate;

pub trait PricePort {
    /// Dated prices for `symbol` within `[start, end]`, sorted by date.
    fn fetch_prices(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, FolioError>;

    fn list_symbols(&self) -> Result<Vec<String>, FolioError>;

    /// Earliest date, latest date and row count for `symbol`, or `None` when
    /// no data exists.
    fn data_range(&self, symbol: &str)
        -> Result<Option<(NaiveDate, NaiveDate, usize)>, FolioError>;
}
