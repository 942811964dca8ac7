//! Currency sub-client — catalog loading.

use super::CurrencyCatalog;
use crate::client::DovizClient;
use crate::error::SdkError;

/// Sub-client for the currency catalog.
pub struct Currencies<'a> {
    pub(crate) client: &'a DovizClient,
}

impl<'a> Currencies<'a> {
    /// Fetch the full catalog. Transport failures, rejections and unreadable payloads are
    /// reported as [`SdkError::CatalogUnavailable`]; individual bad entries are skipped.
    pub async fn load(&self) -> Result<CurrencyCatalog, SdkError> {
        match self.client.http.get_currencies().await {
            Ok(wire) => Ok(CurrencyCatalog::from(wire)),
            Err(e) => {
                tracing::warn!(error = %e, "Currency catalog load failed");
                Err(SdkError::CatalogUnavailable(e.to_string()))
            }
        }
    }
}
