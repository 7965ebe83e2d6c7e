//! High-level service facade over the provider ports.

use crate::model::{ProviderMeta, StoreId, StoreSummary, StoreWithClearances};
use crate::plugin::ProviderPlugin;
use crate::ports::{PortError, StoreQuery};

/// Public entry point for store searches and clearance lookups.
///
/// Stateless between calls; concurrent invocations are independent.
pub struct MadspildService {
    plugin: ProviderPlugin,
}

impl MadspildService {
    /// Create a new service bound to the provided plugin.
    #[must_use]
    pub fn new(plugin: ProviderPlugin) -> Self {
        Self { plugin }
    }

    /// Metadata for the upstream provider in use.
    #[must_use]
    pub fn provider(&self) -> &ProviderMeta {
        &self.plugin.meta
    }

    /// Search the store directory by postal code.
    ///
    /// An absent or blank postal code means "no query performed": the call
    /// resolves to `Ok(None)` without touching the provider.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the provider call fails or returns an
    /// invalid payload.
    pub async fn stores(
        &self,
        query: &StoreQuery,
    ) -> Result<Option<Vec<StoreSummary>>, PortError> {
        if query.is_empty() {
            return Ok(None);
        }

        let zip = query.zip.as_deref().unwrap_or_default().trim();
        let stores = self.plugin.store_port.search(zip).await?;
        Ok(Some(stores))
    }

    /// Load a store's current clearance listing and full metadata.
    ///
    /// An absent store id resolves to `Ok(None)` without touching the
    /// provider.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the provider call fails or returns an
    /// invalid payload.
    pub async fn food_waste_info(
        &self,
        store: Option<&StoreId>,
    ) -> Result<Option<StoreWithClearances>, PortError> {
        let Some(store) = store else {
            return Ok(None);
        };

        let listing = self.plugin.food_waste_port.clearances(store).await?;
        Ok(Some(listing))
    }
}
