//! Conversion: CurrencyListResponse → CurrencyCatalog.

use super::wire::CurrencyListResponse;
use super::{Currency, CurrencyCatalog};
use crate::shared::CurrencyCode;

/// Unusable keys and case-variant duplicates are skipped; the rest of the catalog survives.
impl From<CurrencyListResponse> for CurrencyCatalog {
    fn from(source: CurrencyListResponse) -> Self {
        let mut currencies: Vec<Currency> = Vec::with_capacity(source.len());
        for (raw_code, name) in source {
            let code = match CurrencyCode::parse(&raw_code) {
                Ok(code) => code,
                Err(e) => {
                    tracing::warn!(code = %raw_code, error = %e, "Skipping invalid currency code");
                    continue;
                }
            };
            if currencies.iter().any(|c| c.code == code) {
                tracing::warn!(code = %code, "Duplicate currency code in catalog, keeping first");
                continue;
            }
            currencies.push(Currency {
                code,
                label: raw_code.trim().to_string(),
                name,
            });
        }
        CurrencyCatalog::from_currencies(currencies)
    }
}
