//! CSV file price adapter.
//!
//! Reads one `<SYMBOL>.csv` per symbol from a base directory, columns
//! `date,price`.

use crate::domain::error::FolioError;
use crate::domain::stock::PricePoint;
use crate::ports::price_port::PricePort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvPriceAdapter {
    base_path: PathBuf,
}

impl CsvPriceAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", symbol))
    }

    fn read_points(&self, symbol: &str) -> Result<Vec<PricePoint>, FolioError> {
        let path = self.csv_path(symbol);
        let content = fs::read_to_string(&path).map_err(|e| FolioError::PriceData {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| FolioError::PriceData {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str = record.get(0).ok_or_else(|| FolioError::PriceData {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                FolioError::PriceData {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let price: f64 = record
                .get(1)
                .ok_or_else(|| FolioError::PriceData {
                    reason: "missing price column".into(),
                })?
                .parse()
                .map_err(|e| FolioError::PriceData {
                    reason: format!("invalid price value: {}", e),
                })?;

            if price < 0.0 {
                return Err(FolioError::PriceData {
                    reason: format!("negative price {} for {} on {}", price, symbol, date),
                });
            }

            points.push(PricePoint { date, price });
        }

        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}

impl PricePort for CsvPriceAdapter {
    fn fetch_prices(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>, FolioError> {
        let mut points = self.read_points(symbol)?;
        points.retain(|p| p.date >= start && p.date <= end);
        Ok(points)
    }

    fn list_symbols(&self) -> Result<Vec<String>, FolioError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| FolioError::PriceData {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FolioError::PriceData {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(symbol) = name_str.strip_suffix(".csv") {
                symbols.push(symbol.to_string());
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    fn data_range(
        &self,
        symbol: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, FolioError> {
        if !self.csv_path(symbol).exists() {
            return Ok(None);
        }

        let points = self.read_points(symbol)?;
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, points.len()))),
            _ => Ok(None),
        }
    }
}
