//! Persists the [`PreferenceSet`] to a [`KeyValueStore`].

use super::preference::Preference;
use super::preference_set::PreferenceSet;
use super::preference_set::Touched;
use crate::product::ProductId;
use crate::storage::KeyValueStore;

/// Storage key holding the JSON array of liked ids.
pub const LIKED_KEY: &str = "likedProducts";
/// Storage key holding the JSON array of disliked ids.
pub const DISLIKED_KEY: &str = "dislikedProducts";

/// The in-memory preference set plus the storage it is mirrored to.
///
/// Each toggle writes every list it changed, synchronously, before
/// returning.
#[derive(Debug)]
pub struct PreferenceStore<S: KeyValueStore> {
    set: PreferenceSet,
    storage: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Restores both lists from `storage`. A missing or unparseable value
    /// yields an empty list.
    pub fn load(storage: S) -> Self {
        let liked = read_ids(&storage, LIKED_KEY);
        let disliked = read_ids(&storage, DISLIKED_KEY);
        Self {
            set: PreferenceSet::from_lists(liked, disliked),
            storage,
        }
    }

    pub fn set(&self) -> &PreferenceSet {
        &self.set
    }

    pub fn preference(&self, id: ProductId) -> Preference {
        self.set.preference(id)
    }

    pub fn toggle_like(&mut self, id: ProductId) -> Preference {
        let touched = self.set.toggle_like(id);
        self.persist(touched);
        self.set.preference(id)
    }

    pub fn toggle_dislike(&mut self, id: ProductId) -> Preference {
        let touched = self.set.toggle_dislike(id);
        self.persist(touched);
        self.set.preference(id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self, touched: Touched) {
        if touched.liked {
            write_ids(&mut self.storage, LIKED_KEY, self.set.liked());
        }
        if touched.disliked {
            write_ids(&mut self.storage, DISLIKED_KEY, self.set.disliked());
        }
    }
}

fn read_ids<S: KeyValueStore>(storage: &S, key: &str) -> Vec<ProductId> {
    storage
        .get_item(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

// A failed write leaves the in-memory state authoritative.
fn write_ids<S: KeyValueStore>(storage: &mut S, key: &str, ids: &[ProductId]) {
    let result = serde_json::to_string(ids)
        .map_err(|e| e.to_string())
        .and_then(|raw| storage.set_item(key, &raw).map_err(|e| e.to_string()));

    if let Err(e) = result {
        dioxus_logger::tracing::warn!("could not persist {}: {}", key, e);
    }
}
