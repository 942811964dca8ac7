//! Wire types for the currency list (REST).

use std::collections::BTreeMap;

/// `data` payload of `GET /api/v1/currencies`: code → display name.
pub type CurrencyListResponse = BTreeMap<String, String>;
