//! Loading the full catalog at startup.

use crate::catalog_providers::CatalogError;
use crate::catalog_providers::CatalogService;
use crate::product::Product;
use crate::product::ProductId;

/// Products and category names, always obtained together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

/// What the view layer can observe about the catalog.
#[derive(Debug, Clone, PartialEq, Default, strum::EnumIs)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Loaded(Catalog),
    /// Human readable reason; never empty.
    Failed(String),
}

impl CatalogStatus {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }
}

/// Fetches products and categories concurrently.
///
/// Either both succeed and a complete [`Catalog`] is returned, or the first
/// error is returned and nothing is exposed.
pub async fn load_catalog<S: CatalogService>(service: &S) -> Result<Catalog, CatalogError> {
    let (products_result, categories_result) =
        tokio::join!(service.products(), service.categories());

    let products = products_result?;
    let categories = categories_result?;

    dioxus_logger::tracing::info!(
        "catalog loaded: {} products in {} categories",
        products.len(),
        categories.len()
    );

    Ok(Catalog::new(products, categories))
}
