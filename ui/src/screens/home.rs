//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::components::category_bar::CategoryBar;
use crate::components::empty_state::EmptyState;
use crate::components::pico::ProductGrid;
use crate::components::product_card::ProductCard;
use api::AppShopState;
use dioxus::prelude::*;

/// The feed: category filter plus the filtered product grid.
#[component]
pub fn HomeScreen(shop: Signal<AppShopState>) -> Element {
    let products = shop.read().visible_products();
    let filter_label = shop.read().filter().label().to_string();

    rsx! {
        section {
            CategoryBar { shop }
            if products.is_empty() {
                EmptyState {
                    title: "No products in {filter_label}",
                    description: "Pick another category to keep browsing.".to_string(),
                }
            } else {
                ProductGrid {
                    for product in products {
                        ProductCard {
                            key: "{product.id}",
                            shop,
                            product: product.clone(),
                        }
                    }
                }
            }
        }
    }
}
