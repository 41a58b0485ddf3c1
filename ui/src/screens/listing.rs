//=============================================================================
// File: src/screens/listing.rs
//=============================================================================
use crate::components::pico::Card;
use api::prefs::preference::Preference;
use api::product::Product;
use api::view::View;
use api::AppShopState;
use dioxus::prelude::*;

/// A single row in the full listing table.
#[component]
fn ListingRow(mut shop: Signal<AppShopState>, product: Product) -> Element {
    let preference = shop.read().preference(product.id);
    let marker = match preference {
        Preference::Liked => "♥",
        Preference::Disliked => "✕",
        Preference::Neutral => "",
    };
    let state_name: &'static str = preference.into();
    let price = product.price_label();
    let rating = product.rating;
    let selected = product.clone();

    rsx! {
        tr {
            td {
                a {
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        shop.write().navigate(View::Detail, Some(selected.clone()));
                    },
                    "{product.title}"
                }
            }
            td { "{product.category}" }
            td { "${price}" }
            td { "{rating}" }
            td { title: "{state_name}", "{marker}" }
        }
    }
}

/// Every product in the catalog, unfiltered.
#[allow(non_snake_case)]
#[component]
pub fn ListingScreen(shop: Signal<AppShopState>) -> Element {
    let products = shop.read().all_products().to_vec();

    rsx! {
        Card {
            h3 { "All Products ({products.len()})" }
            table {
                thead { tr {
                    th { "Title" }
                    th { "Category" }
                    th { "Price" }
                    th { "Rating" }
                    th { "" }
                }}
                tbody {
                    for product in products {
                        ListingRow {
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
