#![allow(dead_code)]

use chrono::NaiveDate;
use folio::domain::error::FolioError;
use folio::domain::holdings::Holding;
pub use folio::domain::stock::{PricePoint, Stock};
use folio::ports::price_port::PricePort;
use std::collections::HashMap;

pub struct MockPricePort {
    pub data: HashMap<String, Vec<PricePoint>>,
    pub errors: HashMap<String, String>,
}

impl MockPricePort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_prices(mut self, symbol: &str, points: Vec<PricePoint>) -> Self {
        self.data.insert(symbol.to_string(), points);
        self
    }

    pub fn with_error(mut self, symbol: &str, reason: &str) -> Self {
        self.errors.insert(symbol.to_string(), reason.to_string());
        self
    }
}

impl PricePort for MockPricePort {
    fn fetch_prices(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, FolioError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(FolioError::PriceData {
                reason: reason.clone(),
            });
        }
        let mut points = self.data.get(symbol).cloned().unwrap_or_default();
        points.retain(|p| p.date >= start && p.date <= end);
        points.sort_by_key(|p| p.date);
        Ok(points)
    }

    fn list_symbols(&self) -> Result<Vec<String>, FolioError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, FolioError> {
        if let Some(reason) = self.errors.get(symbol) {
            return Err(FolioError::PriceData {
                reason: reason.clone(),
            });
        }
        match self.data.get(symbol) {
            Some(points) if !points.is_empty() => {
                let min = points.iter().map(|p| p.date).min().unwrap();
                let max = points.iter().map(|p| p.date).max().unwrap();
                Ok(Some((min, max, points.len())))
            }
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_point(date_str: &str, price: f64) -> PricePoint {
    PricePoint {
        date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        price,
    }
}

pub fn make_points(rows: &[(&str, f64)]) -> Vec<PricePoint> {
    rows.iter().map(|&(d, p)| make_point(d, p)).collect()
}

pub fn make_stock(symbol: &str, rows: &[(&str, f64)]) -> Stock {
    Stock::from_points(symbol, make_points(rows))
}

pub fn make_holding(symbol: &str, shares: i64) -> Holding {
    Holding {
        symbol: symbol.to_string(),
        shares,
    }
}

/// The worked example: Apple 150→180, Google 2800→3000 over calendar 2023.
pub fn sample_price_port() -> MockPricePort {
    MockPricePort::new()
        .with_prices(
            "AAPL",
            make_points(&[("2023-01-01", 150.0), ("2023-12-31", 180.0)]),
        )
        .with_prices(
            "GOOG",
            make_points(&[("2023-01-01", 2800.0), ("2023-12-31", 3000.0)]),
        )
}

pub fn sample_holdings() -> Vec<Holding> {
    vec![make_holding("AAPL", 10), make_holding("GOOG", 5)]
}
