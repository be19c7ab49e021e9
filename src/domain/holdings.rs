//! Holdings resolution from configuration.

use crate::domain::error::FolioError;
use crate::ports::config_port::ConfigPort;

/// Config section listing held symbols, one `SYMBOL = shares` entry each.
pub const HOLDINGS_SECTION: &str = "portfolio";

#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub shares: i64,
}

/// Read the `[portfolio]` section into holdings.
///
/// Symbols are uppercased and returned sorted. Share counts may be any
/// integer, negative included. An absent or empty section yields an empty
/// list; the caller decides whether that is an error.
pub fn parse_holdings(config: &dyn ConfigPort) -> Result<Vec<Holding>, FolioError> {
    let mut holdings = Vec::new();

    for key in config.keys(HOLDINGS_SECTION) {
        let raw = config
            .get_string(HOLDINGS_SECTION, &key)
            .ok_or_else(|| FolioError::ConfigMissing {
                section: HOLDINGS_SECTION.to_string(),
                key: key.clone(),
            })?;

        let shares: i64 =
            raw.trim()
                .parse()
                .map_err(|_| FolioError::ConfigInvalid {
                    section: HOLDINGS_SECTION.to_string(),
                    key: key.clone(),
                    reason: format!("share count must be an integer, got '{}'", raw.trim()),
                })?;

        holdings.push(Holding {
            symbol: key.to_uppercase(),
            shares,
        });
    }

    holdings.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    Ok(holdings)
}
