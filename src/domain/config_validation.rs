//! Configuration validation.
//!
//! Validates report and portfolio config sections before a report runs.

use crate::domain::error::FolioError;
use crate::domain::holdings;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub fn validate_report_config(config: &dyn ConfigPort) -> Result<(), FolioError> {
    let start_str = config.get_string("report", "start_date");
    let end_str = config.get_string("report", "end_date");

    let start_date = parse_date(start_str.as_deref(), "start_date")?;
    let end_date = parse_date(end_str.as_deref(), "end_date")?;

    if start_date >= end_date {
        return Err(FolioError::ConfigInvalid {
            section: "report".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must be before end_date".to_string(),
        });
    }
    Ok(())
}

pub fn validate_portfolio_config(config: &dyn ConfigPort) -> Result<(), FolioError> {
    let parsed = holdings::parse_holdings(config)?;
    if parsed.is_empty() {
        return Err(FolioError::ConfigInvalid {
            section: holdings::HOLDINGS_SECTION.to_string(),
            key: "holdings".to_string(),
            reason: "at least one SYMBOL = shares entry is required".to_string(),
        });
    }
    Ok(())
}

pub fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, FolioError> {
    match value {
        None => Err(FolioError::ConfigMissing {
            section: "report".to_string(),
            key: field.to_string(),
        }),
        Some(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| FolioError::ConfigInvalid {
                section: "report".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            })
        }
    }
}
