//! Traits describing provider capabilities and shared helper types.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;
use serde_json::Error as JsonError;

use crate::model::{ProviderMeta, StoreId, StoreSummary, StoreWithClearances};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to the upstream provider.
pub enum PortError {
    /// Network layer failed or the upstream answered with an error status.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The upstream payload did not match the expected shape. The source
    /// error names the offending field.
    #[error("Invalid {context} payload: {source}")]
    Decode {
        /// Which operation produced the bad payload.
        context: String,
        /// Underlying decode failure.
        source: JsonError,
    },
}

#[derive(Debug, Clone, Default)]
/// Query parameters for a store directory search.
pub struct StoreQuery {
    /// Postal code to search at. Absence means "no query performed".
    pub zip: Option<String>,
}

impl StoreQuery {
    /// Construct a new search query.
    #[must_use]
    pub fn new<Z: Into<String>>(zip: Option<Z>) -> Self {
        Self {
            zip: zip.map(Into::into),
        }
    }

    /// Check whether the query carries a usable postal code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zip
            .as_deref()
            .is_none_or(|zip| zip.trim().is_empty())
    }
}

#[async_trait]
/// Trait for store directory backends.
pub trait StoreDirectoryPort: Send + Sync {
    /// Metadata describing the provider behind this port.
    fn provider(&self) -> &ProviderMeta;

    /// List the stores at a postal code, restricted to brands that carry
    /// food-waste clearance listings.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the provider request fails or the
    /// response shape is invalid.
    async fn search(&self, zip: &str) -> Result<Vec<StoreSummary>, PortError>;
}

#[async_trait]
/// Trait for food-waste clearance listing backends.
pub trait FoodWastePort: Send + Sync {
    /// Metadata describing the provider behind this port.
    fn provider(&self) -> &ProviderMeta;

    /// Fetch a store's current clearance listing and full metadata.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] when the provider request fails or the
    /// response shape is invalid.
    async fn clearances(&self, store: &StoreId) -> Result<StoreWithClearances, PortError>;
}

#[cfg(test)]
mod tests {
    use super::StoreQuery;

    #[test]
    fn store_query_without_zip_is_empty() {
        assert!(StoreQuery::new(None::<String>).is_empty());
        assert!(StoreQuery::new(Some("")).is_empty());
        assert!(StoreQuery::new(Some("   ")).is_empty());
        assert!(!StoreQuery::new(Some("9220")).is_empty());
    }
}
