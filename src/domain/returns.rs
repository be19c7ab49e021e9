//! Return annualization math.

use crate::domain::error::FolioError;
use chrono::NaiveDate;

/// Fixed-length year used for annualization. Leap days count as ordinary days.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Elapsed time between two dates as a fraction of a 365-day year.
pub fn year_fraction(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}

/// Compound yearly rate implied by `total_return` over `years`:
/// `(1 + total_return)^(1/years) - 1`.
///
/// Fails rather than returning NaN or infinity: a zero-length period has no
/// defined rate, and a fractional power of a negative base has no real root.
pub fn annualize(total_return: f64, years: f64) -> Result<f64, FolioError> {
    if years == 0.0 {
        return Err(FolioError::ZeroPeriod);
    }

    let growth = 1.0 + total_return;
    if growth < 0.0 {
        return Err(FolioError::NonRealReturn {
            total_return,
            years,
        });
    }

    let rate = growth.powf(1.0 / years) - 1.0;
    if !rate.is_finite() {
        return Err(FolioError::NonRealReturn {
            total_return,
            years,
        });
    }
    Ok(rate)
}
