//! Stock identity and price history.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// A single recorded price for a symbol on a calendar date.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// A stock with a history of recorded closing prices.
///
/// Identity is the symbol alone: two `Stock`s with the same symbol are equal
/// and hash identically even when their price histories differ. Inserting a
/// second `Stock` with an already-held symbol into a holdings map therefore
/// overwrites the mapped share count while the first instance (and its
/// history) stays in place as the key.
#[derive(Debug, Clone)]
pub struct Stock {
    symbol: String,
    prices: HashMap<NaiveDate, f64>,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, prices: HashMap<NaiveDate, f64>) -> Self {
        Self {
            symbol: symbol.into(),
            prices,
        }
    }

    /// Build a stock from dated price rows. Later rows win on duplicate dates.
    pub fn from_points(symbol: impl Into<String>, points: Vec<PricePoint>) -> Self {
        let prices = points.into_iter().map(|p| (p.date, p.price)).collect();
        Self::new(symbol, prices)
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Price recorded for exactly `date`. No interpolation between entries,
    /// no nearest-date fallback.
    pub fn price(&self, date: NaiveDate) -> Option<f64> {
        self.prices.get(&date).copied()
    }

    pub fn price_count(&self) -> usize {
        self.prices.len()
    }

    /// Earliest and latest dates with a recorded price.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.prices.keys().min()?;
        let max = self.prices.keys().max()?;
        Some((*min, *max))
    }
}

impl PartialEq for Stock {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Stock {}

impl Hash for Stock {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_stock() -> Stock {
        Stock::from_points(
            "AAPL",
            vec![
                PricePoint {
                    date: date(2023, 1, 1),
                    price: 150.0,
                },
                PricePoint {
                    date: date(2023, 12, 31),
                    price: 180.0,
                },
            ],
        )
    }

    #[test]
    fn price_exact_date() {
        let stock = sample_stock();
        let price = stock.price(date(2023, 1, 1));
        assert!(price.is_some());
        assert!((price.unwrap() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_absent_for_unrecorded_date() {
        let stock = sample_stock();
        // A date between two recorded entries is absent, never interpolated.
        assert!(stock.price(date(2023, 6, 15)).is_none());
        assert!(stock.price(date(2022, 12, 31)).is_none());
    }

    #[test]
    fn from_points_later_row_wins_on_duplicate_date() {
        let stock = Stock::from_points(
            "AAPL",
            vec![
                PricePoint {
                    date: date(2023, 1, 1),
                    price: 150.0,
                },
                PricePoint {
                    date: date(2023, 1, 1),
                    price: 155.0,
                },
            ],
        );
        assert_eq!(stock.price_count(), 1);
        assert!((stock.price(date(2023, 1, 1)).unwrap() - 155.0).abs() < f64::EPSILON);
    }

    #[test]
    fn equality_by_symbol_only() {
        let a = Stock::from_points(
            "AAPL",
            vec![PricePoint {
                date: date(2023, 1, 1),
                price: 150.0,
            }],
        );
        let b = Stock::from_points(
            "AAPL",
            vec![PricePoint {
                date: date(2023, 1, 1),
                price: 999.0,
            }],
        );
        let c = Stock::new("GOOG", HashMap::new());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn same_symbol_collapses_in_map() {
        let a = Stock::from_points(
            "AAPL",
            vec![PricePoint {
                date: date(2023, 1, 1),
                price: 150.0,
            }],
        );
        let b = Stock::from_points(
            "AAPL",
            vec![PricePoint {
                date: date(2023, 1, 1),
                price: 999.0,
            }],
        );

        let mut map: HashMap<Stock, i64> = HashMap::new();
        map.insert(a, 10);
        map.insert(b, 5);

        assert_eq!(map.len(), 1);
        assert_eq!(map.values().copied().next(), Some(5));
    }

    #[test]
    fn date_range_spans_history() {
        let stock = sample_stock();
        let (min, max) = stock.date_range().unwrap();
        assert_eq!(min, date(2023, 1, 1));
        assert_eq!(max, date(2023, 12, 31));
    }

    #[test]
    fn date_range_empty_history() {
        let stock = Stock::new("EMPTY", HashMap::new());
        assert!(stock.date_range().is_none());
        assert_eq!(stock.price_count(), 0);
    }
}
