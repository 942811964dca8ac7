//! Currency domain — the catalog of supported currency codes and display names.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CurrencyCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A selectable currency: canonical code, the code as the service spelled it, and a
/// human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: CurrencyCode,
    pub label: String,
    pub name: String,
}

/// Immutable snapshot of the currencies the service supports.
///
/// Keyed by canonical code for lookups; each entry keeps the upstream spelling for
/// display. Built once per page activation and replaced wholesale on re-fetch; there is
/// no incremental merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyCatalog {
    entries: BTreeMap<CurrencyCode, Currency>,
}

impl CurrencyCatalog {
    /// Catalog from canonical codes and names; labels are the canonical codes.
    pub fn new(entries: BTreeMap<CurrencyCode, String>) -> Self {
        Self::from_currencies(entries.into_iter().map(|(code, name)| Currency {
            label: code.as_str().to_string(),
            code,
            name,
        }))
    }

    /// The first entry wins when two share a canonical code.
    pub fn from_currencies(currencies: impl IntoIterator<Item = Currency>) -> Self {
        let mut entries = BTreeMap::new();
        for currency in currencies {
            entries.entry(currency.code.clone()).or_insert(currency);
        }
        Self { entries }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.entries.contains_key(code)
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&Currency> {
        self.entries.get(code)
    }

    pub fn name_of(&self, code: &CurrencyCode) -> Option<&str> {
        self.get(code).map(|c| c.name.as_str())
    }

    /// Upstream spelling of `code`, e.g. `"USD"` for `usd`.
    pub fn label_of(&self, code: &CurrencyCode) -> Option<&str> {
        self.get(code).map(|c| c.label.as_str())
    }

    /// Codes in ascending order, ready for a selection list.
    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.entries.keys()
    }

    /// Upstream spellings, in the same order as [`Self::codes`].
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|c| c.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Currency> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
