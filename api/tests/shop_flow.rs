//! End-to-end flows through `ShopState` with an in-memory catalog and storage.

use api::catalog::load_catalog;
use api::catalog::CatalogStatus;
use api::catalog_providers::CatalogError;
use api::catalog_providers::CatalogService;
use api::filter::CategoryFilter;
use api::prefs::preference::Preference;
use api::prefs::preference_store::PreferenceStore;
use api::product::Product;
use api::product::Rating;
use api::shop_state::ShopState;
use api::storage::MemoryStore;
use api::view::View;

enum FakeService {
    Ok(Vec<Product>, Vec<String>),
    Unavailable(u16),
}

impl CatalogService for FakeService {
    async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        match self {
            FakeService::Ok(products, _) => Ok(products.clone()),
            FakeService::Unavailable(status) => Err(CatalogError::Status {
                status: *status,
                url: "https://catalog.test/products".to_string(),
            }),
        }
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        match self {
            FakeService::Ok(_, categories) => Ok(categories.clone()),
            FakeService::Unavailable(status) => Err(CatalogError::Status {
                status: *status,
                url: "https://catalog.test/products/categories".to_string(),
            }),
        }
    }
}

fn product(id: u64, category: &str) -> Product {
    Product {
        id,
        title: format!("item {id}"),
        price: 9.99,
        category: category.to_string(),
        description: "test item".to_string(),
        image: String::new(),
        rating: Rating { rate: 4.0, count: 3 },
    }
}

async fn loaded_state(storage: MemoryStore, service: &FakeService) -> ShopState<MemoryStore> {
    let mut state = ShopState::new(PreferenceStore::load(storage));
    let ticket = state.begin_load();
    let result = load_catalog(service).await;
    state.finish_load(ticket, result);
    state
}

#[tokio::test]
async fn browse_like_dislike_and_reload() {
    let storage = MemoryStore::new();
    let service = FakeService::Ok(
        vec![product(1, "a"), product(2, "b")],
        vec!["a".to_string(), "b".to_string()],
    );
    let mut state = loaded_state(storage.clone(), &service).await;

    state.set_filter(CategoryFilter::Category("a".to_string()));
    let visible: Vec<_> = state.visible_products().iter().map(|p| p.id).collect();
    assert_eq!(visible, vec![1]);

    state.toggle_like(1);
    state.navigate(View::Favorites, None);
    let favorites: Vec<_> = state.favorites().iter().map(|p| p.id).collect();
    assert_eq!(favorites, vec![1]);

    state.toggle_dislike(1);
    assert!(state.favorites().is_empty());
    assert_eq!(state.preference(1), Preference::Disliked);

    // Simulate a page reload over the same storage.
    let reloaded = loaded_state(storage, &service).await;
    assert_eq!(reloaded.preference(1), Preference::Disliked);
    assert!(reloaded.favorites().is_empty());
    assert_eq!(reloaded.view().view(), View::Home);
    assert_eq!(reloaded.filter(), &CategoryFilter::All);
}

#[tokio::test]
async fn non_success_status_exposes_no_products() {
    let mut state = loaded_state(MemoryStore::new(), &FakeService::Unavailable(503)).await;

    match state.catalog_status() {
        CatalogStatus::Failed(message) => assert!(!message.is_empty()),
        other => panic!("expected failed status, got {other:?}"),
    }
    assert!(state.visible_products().is_empty());
    assert!(state.all_products().is_empty());
    assert!(state.categories().is_empty());

    // Preferences still work while the catalog is unavailable.
    assert_eq!(state.toggle_like(42), Preference::Liked);
}

#[tokio::test]
async fn retry_after_failure_loads_catalog() {
    let storage = MemoryStore::new();
    let mut state = loaded_state(storage, &FakeService::Unavailable(500)).await;
    assert!(state.catalog_status().is_failed());

    let service = FakeService::Ok(vec![product(7, "c")], vec!["c".to_string()]);
    let ticket = state.begin_load();
    let result = load_catalog(&service).await;
    assert!(state.finish_load(ticket, result));

    assert_eq!(state.visible_products().len(), 1);
    assert_eq!(state.categories(), &["c".to_string()]);
}
