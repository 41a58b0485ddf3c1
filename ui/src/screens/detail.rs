//=============================================================================
// File: src/screens/detail.rs
//=============================================================================
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::preference_buttons::PreferenceButtons;
use api::view::View;
use api::AppShopState;
use dioxus::prelude::*;

#[component]
pub fn DetailScreen(mut shop: Signal<AppShopState>) -> Element {
    let selected = shop.read().view().selected().cloned();

    let Some(product) = selected else {
        return rsx! {
            EmptyState {
                title: "No product selected",
                description: "Open a product from the feed to see its details.".to_string(),
                primary_action: rsx! {
                    Button {
                        on_click: move |_| shop.write().navigate(View::Home, None),
                        "Back to feed"
                    }
                },
            }
        };
    };

    let price = product.price_label();
    let rating = product.rating;

    rsx! {
        Card {
            div {
                class: "detail-layout",
                img {
                    src: "{product.image}",
                    alt: "{product.title}",
                }
                div {
                    h2 { "{product.title}" }
                    p { small { "{product.category}" } }
                    p { strong { "${price}" } }
                    p { "Rating: {rating}" }
                    p { "{product.description}" }
                    PreferenceButtons { shop, id: product.id }
                }
            }
            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| shop.write().navigate(View::Home, None),
                    "Back to feed"
                }
            }
        }
    }
}
