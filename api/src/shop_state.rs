//! The single state object behind the UI.
//!
//! `ShopState` owns the catalog status, the preference store, the category
//! filter and the view selection. It is built once at the application root
//! and handed to whoever needs it; every mutation notifies the registered
//! observers with the kind of [`Change`] it made.

use crate::catalog::Catalog;
use crate::catalog::CatalogStatus;
use crate::catalog_providers::CatalogError;
use crate::filter::favorites;
use crate::filter::filter_products;
use crate::filter::CategoryFilter;
use crate::observer::Observers;
use crate::observer::SubscriptionId;
use crate::prefs::preference::Preference;
use crate::prefs::preference_set::PreferenceSet;
use crate::prefs::preference_store::PreferenceStore;
use crate::product::Product;
use crate::product::ProductId;
use crate::storage::KeyValueStore;
use crate::view::View;
use crate::view::ViewState;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

/// What part of the state a mutation changed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::EnumIs, strum::IntoStaticStr)]
pub enum Change {
    Catalog,
    Preferences,
    Filter,
    View,
}

/// Identifies one catalog load. Only the most recent ticket may complete.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LoadTicket(u64);

pub struct ShopState<S: KeyValueStore> {
    catalog: CatalogStatus,
    load_generation: u64,
    prefs: PreferenceStore<S>,
    filter: CategoryFilter,
    view: ViewState,
    observers: Observers<Change>,
}

impl<S: KeyValueStore> ShopState<S> {
    /// Starts in [`CatalogStatus::Loading`] on the home view, with no filter.
    pub fn new(prefs: PreferenceStore<S>) -> Self {
        Self {
            catalog: CatalogStatus::Loading,
            load_generation: 0,
            prefs,
            filter: CategoryFilter::All,
            view: ViewState::default(),
            observers: Observers::default(),
        }
    }

    // --- Observers ---

    pub fn subscribe(&mut self, observer: impl Fn(&Change) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn changed(&self, change: Change) {
        self.observers.notify(&change);
    }

    // --- Catalog ---

    /// Marks the catalog as loading and returns the ticket the result must
    /// be delivered with. Any earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        info!("loading catalog (attempt {})", self.load_generation);
        if !self.catalog.is_loading() {
            self.catalog = CatalogStatus::Loading;
            self.changed(Change::Catalog);
        }
        LoadTicket(self.load_generation)
    }

    /// Applies a load result. Returns `false`, changing nothing, when the
    /// ticket has been superseded by a later [`begin_load`](Self::begin_load).
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Catalog, CatalogError>) -> bool {
        if ticket.0 != self.load_generation {
            debug!(
                "ignoring stale catalog load {} (current {})",
                ticket.0, self.load_generation
            );
            return false;
        }

        self.catalog = match result {
            Ok(catalog) => CatalogStatus::Loaded(catalog),
            Err(e) => {
                warn!("catalog load failed: {}", e);
                CatalogStatus::Failed(failure_message(&e))
            }
        };
        self.changed(Change::Catalog);
        true
    }

    pub fn catalog_status(&self) -> &CatalogStatus {
        &self.catalog
    }

    /// Category names, empty until loaded.
    pub fn categories(&self) -> &[String] {
        self.catalog
            .catalog()
            .map(|c| c.categories.as_slice())
            .unwrap_or_default()
    }

    fn products(&self) -> &[Product] {
        self.catalog
            .catalog()
            .map(|c| c.products.as_slice())
            .unwrap_or_default()
    }

    /// The catalog after the current filter, empty until loaded.
    pub fn visible_products(&self) -> Vec<Product> {
        filter_products(self.products(), &self.filter)
    }

    /// Every loaded product, unfiltered.
    pub fn all_products(&self) -> &[Product] {
        self.products()
    }

    /// Liked products in catalog order.
    pub fn favorites(&self) -> Vec<Product> {
        favorites(self.products(), self.prefs.set())
    }

    // --- Filter ---

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.changed(Change::Filter);
    }

    // --- View ---

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn navigate(&mut self, view: View, product: Option<Product>) {
        self.view.navigate(view, product);
        self.changed(Change::View);
    }

    // --- Preferences ---

    pub fn preferences(&self) -> &PreferenceSet {
        self.prefs.set()
    }

    pub fn preference(&self, id: ProductId) -> Preference {
        self.prefs.preference(id)
    }

    pub fn toggle_like(&mut self, id: ProductId) -> Preference {
        let preference = self.prefs.toggle_like(id);
        self.changed(Change::Preferences);
        preference
    }

    pub fn toggle_dislike(&mut self, id: ProductId) -> Preference {
        let preference = self.prefs.toggle_dislike(id);
        self.changed(Change::Preferences);
        preference
    }
}

/// The message shown to the user. Transport and status failures share one
/// generic wording; the detail is kept for the log.
fn failure_message(e: &CatalogError) -> String {
    match e {
        CatalogError::Transport(_) | CatalogError::Status { .. } => {
            "Could not load products. Please try again.".to_string()
        }
        CatalogError::Decode(_) => {
            "The catalog returned data that could not be read. Please try again.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn state() -> ShopState<MemoryStore> {
        ShopState::new(PreferenceStore::load(MemoryStore::new()))
    }

    fn sample_catalog() -> Catalog {
        Catalog::new(
            vec![product(1, "a"), product(2, "b"), product(3, "a")],
            vec!["a".into(), "b".into()],
        )
    }

    fn record(state: &mut ShopState<MemoryStore>) -> Rc<RefCell<Vec<Change>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        state.subscribe(move |c| sink.borrow_mut().push(*c));
        log
    }

    #[test]
    fn nothing_visible_while_loading() {
        let state = state();
        assert!(state.catalog_status().is_loading());
        assert!(state.visible_products().is_empty());
        assert!(state.categories().is_empty());
    }

    #[test]
    fn loaded_catalog_is_filtered() {
        let mut state = state();
        let ticket = state.begin_load();
        assert!(state.finish_load(ticket, Ok(sample_catalog())));
        assert_eq!(state.visible_products().len(), 3);
        assert_eq!(state.categories(), &["a", "b"]);

        state.set_filter(CategoryFilter::Category("a".into()));
        let ids: Vec<_> = state.visible_products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(state.all_products().len(), 3);
    }

    #[test]
    fn failure_sets_message_and_hides_products() {
        let mut state = state();
        let ticket = state.begin_load();
        state.finish_load(
            ticket,
            Err(CatalogError::Status {
                status: 500,
                url: "/products".into(),
            }),
        );
        match state.catalog_status() {
            CatalogStatus::Failed(msg) => assert!(!msg.is_empty()),
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(state.visible_products().is_empty());
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn reload_after_failure_recovers() {
        let mut state = state();
        let first = state.begin_load();
        state.finish_load(first, Err(CatalogError::Transport("offline".into())));
        assert!(state.catalog_status().is_failed());

        let second = state.begin_load();
        assert!(state.catalog_status().is_loading());
        state.finish_load(second, Ok(sample_catalog()));
        assert!(state.catalog_status().is_loaded());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut state = state();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, Ok(sample_catalog())));
        assert!(!state.finish_load(first, Err(CatalogError::Transport("late".into()))));
        assert!(state.catalog_status().is_loaded());
    }

    #[test]
    fn favorites_track_toggles() {
        let mut state = state();
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(sample_catalog()));

        assert_eq!(state.toggle_like(3), Preference::Liked);
        assert_eq!(state.toggle_like(1), Preference::Liked);
        let ids: Vec<_> = state.favorites().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(state.toggle_dislike(3), Preference::Disliked);
        assert_eq!(state.favorites().len(), 1);
        assert_eq!(state.preference(3), Preference::Disliked);
        assert!(state.preferences().is_disliked(3));
    }

    #[test]
    fn every_mutation_notifies() {
        let mut state = state();
        let log = record(&mut state);

        let ticket = state.begin_load(); // already loading: no change
        state.finish_load(ticket, Ok(sample_catalog()));
        state.set_filter(CategoryFilter::All);
        state.navigate(View::Detail, Some(product(2, "b")));
        state.toggle_like(2);
        state.toggle_dislike(2);

        assert_eq!(
            *log.borrow(),
            vec![
                Change::Catalog,
                Change::Filter,
                Change::View,
                Change::Preferences,
                Change::Preferences,
            ]
        );
        assert_eq!(state.view().selected().map(|p| p.id), Some(2));
    }

    #[test]
    fn unsubscribed_observer_is_silent() {
        let mut state = state();
        let log = Rc::new(RefCell::new(0));
        let sink = log.clone();
        let id = state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.navigate(View::Favorites, None);
        assert!(state.unsubscribe(id));
        state.navigate(View::Home, None);

        assert_eq!(*log.borrow(), 1);
    }
}
