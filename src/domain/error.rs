//! Domain error types.

use chrono::NaiveDate;

/// Top-level error type for folio.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("no price for {symbol} on {date}")]
    MissingPrice { symbol: String, date: NaiveDate },

    #[error("cannot annualize over a zero-length period")]
    ZeroPeriod,

    #[error("cannot annualize: portfolio value on {date} is zero")]
    ZeroStartValue { date: NaiveDate },

    #[error("annualized return is undefined for total return {total_return} over {years} years")]
    NonRealReturn { total_return: f64, years: f64 },

    #[error("price data error: {reason}")]
    PriceData { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&FolioError> for std::process::ExitCode {
    fn from(err: &FolioError) -> Self {
        let code: u8 = match err {
            FolioError::Io(_) => 1,
            FolioError::ConfigParse { .. }
            | FolioError::ConfigMissing { .. }
            | FolioError::ConfigInvalid { .. } => 2,
            FolioError::PriceData { .. } => 3,
            FolioError::MissingPrice { .. } => 4,
            FolioError::ZeroPeriod
            | FolioError::ZeroStartValue { .. }
            | FolioError::NonRealReturn { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_price_display() {
        let err = FolioError::MissingPrice {
            symbol: "AAPL".into(),
            date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        };
        assert_eq!(err.to_string(), "no price for AAPL on 2023-01-01");
    }

    #[test]
    fn config_missing_display() {
        let err = FolioError::ConfigMissing {
            section: "report".into(),
            key: "start_date".into(),
        };
        assert_eq!(err.to_string(), "missing config key [report] start_date");
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FolioError::from(io);
        assert!(matches!(err, FolioError::Io(_)));
    }
}
