//! This crate contains the platform-neutral core of the product feed: the
//! catalog client, the preference store and the state the UI renders from.

pub mod catalog;
pub mod catalog_providers;
pub mod config;
pub mod filter;
pub mod observer;
pub mod prefs;
pub mod product;
pub mod shop_state;
pub mod storage;
pub mod view;

use catalog::Catalog;
use catalog_providers::fake_store::FakeStore;
use catalog_providers::CatalogError;
use config::ShopConfig;
use prefs::preference_store::PreferenceStore;
use shop_state::ShopState;
use storage::PlatformStore;

/// The state type the application runs with on the current platform.
pub type AppShopState = ShopState<PlatformStore>;

/// Builds the application state, restoring preferences from the platform
/// store named by `config`.
pub fn new_shop_state(config: &ShopConfig) -> AppShopState {
    ShopState::new(PreferenceStore::load(PlatformStore::open(config)))
}

/// Loads the full catalog from the service named by `config`.
pub async fn fetch_catalog(config: &ShopConfig) -> Result<Catalog, CatalogError> {
    catalog::load_catalog(&FakeStore::new(config.catalog_base_url.clone())).await
}
