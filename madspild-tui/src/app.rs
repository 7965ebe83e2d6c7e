use std::sync::Arc;
use std::time::{Duration, Instant};

use madspild_core::{
    model::{StoreSummary, StoreWithClearances},
    service::MadspildService,
};
use madspild_provider_salling::DEFAULT_ZIP;

/// How often the clearance view re-fetches while open.
pub(crate) const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy)]
pub(crate) enum Screen {
    StoreSearch,
    ClearanceView,
}

pub(crate) struct App {
    pub service: Arc<MadspildService>,

    pub screen: Screen,

    pub zip_input: String,
    pub stores: Vec<StoreSummary>,
    pub store_list_index: usize,
    pub selected_store: Option<StoreSummary>,

    pub listing: Option<StoreWithClearances>,
    pub last_refresh: Option<Instant>,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<MadspildService>) -> Self {
        Self {
            service,
            screen: Screen::StoreSearch,
            zip_input: DEFAULT_ZIP.to_owned(),
            stores: Vec::new(),
            store_list_index: 0,
            selected_store: None,
            listing: None,
            last_refresh: None,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn select_current_store(&mut self) -> Option<StoreSummary> {
        let store = self.stores.get(self.store_list_index).cloned()?;
        self.selected_store = Some(store.clone());
        self.screen = Screen::ClearanceView;
        Some(store)
    }

    pub(crate) fn listing_is_stale(&self) -> bool {
        self.last_refresh
            .is_none_or(|refreshed| refreshed.elapsed() >= REFRESH_INTERVAL)
    }
}
