//! Provider implementation for the Salling Group public API.
//!
//! Two endpoints are used: the store directory (`/v2/stores/`) for postal
//! code searches and the food-waste endpoint (`/v1/food-waste/{storeId}`)
//! for per-store clearance listings. Both require a bearer credential.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use madspild_core::{
    model::{Brand, ProviderId, ProviderMeta, StoreId, StoreSummary, StoreWithClearances},
    plugin::ProviderPlugin,
    ports::{FoodWastePort, PortError, StoreDirectoryPort},
};

const BASE_URL: &str = "https://api.sallinggroup.com";

// The directory carries far more per store; we only ever need these three.
const STORE_FIELDS: &str = "id,name,brand";
const STORES_PER_PAGE: &str = "20";

/// Fallback postal code frontends can seed their first query with.
pub const DEFAULT_ZIP: &str = "9220";

/// Single store row from /v2/stores/, before the brand filter.
#[derive(Debug, Deserialize)]
struct StoreRow {
    id: String,
    name: String,
    brand: String,
}

/// Store directory search against the Salling Group API.
pub struct SallingStoreDirectoryPort {
    client: Client,
    api_key: String,
    base_url: String,
    meta: ProviderMeta,
}

impl SallingStoreDirectoryPort {
    /// Create a new directory port bound to the given HTTP client and
    /// bearer credential.
    #[must_use]
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, BASE_URL)
    }

    /// Create a directory port against a custom base URL (for tests).
    #[must_use]
    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: normalize_base_url(base_url.into()),
            meta: provider_meta(),
        }
    }
}

#[async_trait]
impl StoreDirectoryPort for SallingStoreDirectoryPort {
    fn provider(&self) -> &ProviderMeta {
        &self.meta
    }

    async fn search(&self, zip: &str) -> Result<Vec<StoreSummary>, PortError> {
        let req = self
            .client
            .get(format!("{}/v2/stores/", self.base_url))
            .bearer_auth(&self.api_key)
            .query(&[
                ("fields", STORE_FIELDS),
                ("per_page", STORES_PER_PAGE),
                ("zip", zip),
            ]);

        let rows = fetch_json::<Vec<StoreRow>>(req, "store directory").await?;

        // Only these brands ever return clearance data; everything else is a
        // dead end for the picker and is dropped silently.
        let stores = rows
            .into_iter()
            .filter_map(|row| {
                Brand::parse(&row.brand).map(|brand| StoreSummary {
                    id: StoreId(row.id),
                    name: row.name,
                    brand,
                })
            })
            .collect();

        Ok(stores)
    }
}

/// Clearance listing lookup against the Salling Group food-waste API.
pub struct SallingFoodWastePort {
    client: Client,
    api_key: String,
    base_url: String,
    meta: ProviderMeta,
}

impl SallingFoodWastePort {
    /// Create a new food-waste port bound to the given HTTP client and
    /// bearer credential.
    #[must_use]
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, BASE_URL)
    }

    /// Create a food-waste port against a custom base URL (for tests).
    #[must_use]
    pub fn with_base_url(
        client: Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: normalize_base_url(base_url.into()),
            meta: provider_meta(),
        }
    }
}

#[async_trait]
impl FoodWastePort for SallingFoodWastePort {
    fn provider(&self) -> &ProviderMeta {
        &self.meta
    }

    async fn clearances(&self, store: &StoreId) -> Result<StoreWithClearances, PortError> {
        let req = self
            .client
            .get(format!("{}/v1/food-waste/{}", self.base_url, store.0))
            .bearer_auth(&self.api_key);

        // Returned as-is: the listing is not filtered.
        fetch_json(req, "food waste listing").await
    }
}

/// Build the plugin bundle for the Salling Group provider.
#[must_use]
pub fn plugin(client: Client, api_key: impl Into<String>) -> ProviderPlugin {
    let api_key = api_key.into();
    let store_port = Arc::new(SallingStoreDirectoryPort::new(
        client.clone(),
        api_key.clone(),
    ));
    let food_waste_port = Arc::new(SallingFoodWastePort::new(client, api_key));

    ProviderPlugin {
        meta: provider_meta(),
        store_port,
        food_waste_port,
    }
}

fn provider_meta() -> ProviderMeta {
    ProviderMeta {
        id: ProviderId(String::from("salling")),
        name: String::from("Salling Group"),
    }
}

fn normalize_base_url(base_url: String) -> String {
    base_url.trim_end_matches('/').to_owned()
}

// Small helper to fetch and strictly decode JSON with status handling. The
// body is read as text first so decode failures carry the serde field path
// instead of an opaque reqwest error.
async fn fetch_json<T: DeserializeOwned>(
    req: RequestBuilder,
    context: &str,
) -> Result<T, PortError> {
    let body = req
        .send()
        .await
        .map_err(PortError::from)?
        .error_for_status()
        .map_err(PortError::from)?
        .text()
        .await
        .map_err(PortError::from)?;

    serde_json::from_str(&body).map_err(|source| PortError::Decode {
        context: context.to_owned(),
        source,
    })
}
