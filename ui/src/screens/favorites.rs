//=============================================================================
// File: src/screens/favorites.rs
//=============================================================================
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ProductGrid;
use crate::components::product_card::ProductCard;
use api::view::View;
use api::AppShopState;
use dioxus::prelude::*;

#[component]
pub fn FavoritesScreen(mut shop: Signal<AppShopState>) -> Element {
    let favorites = shop.read().favorites();

    rsx! {
        section {
            h3 { "Favorites" }
            if favorites.is_empty() {
                EmptyState {
                    title: "No favorites yet",
                    description: "Products you like show up here.".to_string(),
                    icon: rsx! { "♡" },
                    primary_action: rsx! {
                        Button {
                            on_click: move |_| shop.write().navigate(View::Home, None),
                            "Browse products"
                        }
                    },
                }
            } else {
                ProductGrid {
                    for product in favorites {
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
