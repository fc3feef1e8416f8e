use std::sync::Arc;

use crate::config::store::{StoreBackend, StoreSettings};

pub mod google_sheets;
pub mod layout;
pub mod memory;
pub mod store;

use google_sheets::GoogleSheetsStore;
use memory::InMemoryStore;
use store::{StoreError, TabularStore};

/// Build the configured tabular store.
pub fn build_store(settings: &StoreSettings) -> Result<Arc<dyn TabularStore>, StoreError> {
    match settings.backend {
        StoreBackend::InMemory => {
            tracing::warn!("Using the in-memory store; results are lost on restart");
            Ok(Arc::new(InMemoryStore::with_standard_layout()))
        }
        StoreBackend::GoogleSheets => {
            let store = GoogleSheetsStore::from_settings(settings)?;
            tracing::info!("Using Google Sheets store");
            Ok(Arc::new(store))
        }
    }
}
