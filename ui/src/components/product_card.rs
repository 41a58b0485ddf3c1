use crate::components::pico::Card;
use crate::components::preference_buttons::PreferenceButtons;
use api::product::Product;
use api::view::View;
use api::AppShopState;
use dioxus::prelude::*;

/// A product tile: image, title, price and the preference toggles.
///
/// Clicking the image or title opens the detail view.
#[component]
pub fn ProductCard(mut shop: Signal<AppShopState>, product: Product) -> Element {
    let id = product.id;
    let price = product.price_label();
    let open_image = product.clone();
    let open_title = product.clone();

    rsx! {
        Card {
            img {
                src: "{product.image}",
                alt: "{product.title}",
                style: "cursor: pointer;",
                onclick: move |_| shop.write().navigate(View::Detail, Some(open_image.clone())),
            }
            a {
                class: "product-title",
                href: "#",
                onclick: move |evt| {
                    evt.prevent_default();
                    shop.write().navigate(View::Detail, Some(open_title.clone()));
                },
                "{product.title}"
            }
            p {
                small { "{product.category}" }
                br {}
                strong { "${price}" }
            }
            PreferenceButtons { shop, id }
        }
    }
}
