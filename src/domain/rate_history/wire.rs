//! Wire types for rate history responses (REST).

use crate::shared::serde_util::RateValue;
use serde::Deserialize;

/// One entry of the `data` array of `GET /api/v1/rates/{base}/{target}/range`.
///
/// The backend also echoes `base`, `target` and a fetch `timestamp`; only `date` and
/// `rate` are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateEntryResponse {
    pub date: String,
    pub rate: RateValue,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// `data` payload of the range endpoint.
pub type RateRangeResponse = Vec<RateEntryResponse>;
