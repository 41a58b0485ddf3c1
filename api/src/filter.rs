//! Deriving the displayed subset of the catalog.

use crate::prefs::preference_set::PreferenceSet;
use crate::product::Product;

/// The selected category, or no filter at all.
#[derive(Clone, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == *category,
        }
    }

    /// Label for filter controls.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All",
            Self::Category(category) => category,
        }
    }
}

/// Returns the products matching `filter`, in catalog order.
pub fn filter_products(products: &[Product], filter: &CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Returns the liked products, in catalog order.
///
/// Liked ids that no longer exist in the catalog are skipped.
pub fn favorites(products: &[Product], prefs: &PreferenceSet) -> Vec<Product> {
    products
        .iter()
        .filter(|p| prefs.is_liked(p.id))
        .cloned()
        .collect()
}
