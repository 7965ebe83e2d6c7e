//! Bundle of ports implementing a single upstream provider.

use std::sync::Arc;

use crate::model::ProviderMeta;
use crate::ports::{FoodWastePort, StoreDirectoryPort};

/// Collection of ports implementing one upstream provider.
///
/// There is a single provider today (Salling Group), but the bundle keeps
/// the seam so the service never talks to a concrete backend directly.
pub struct ProviderPlugin {
    /// Static metadata describing the provider.
    pub meta: ProviderMeta,
    /// Implementation for searching the store directory.
    pub store_port: Arc<dyn StoreDirectoryPort>,
    /// Implementation for fetching clearance listings.
    pub food_waste_port: Arc<dyn FoodWastePort>,
}
