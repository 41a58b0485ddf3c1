use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use api::product::ProductId;
use api::AppShopState;
use dioxus::prelude::*;

/// Like / dislike toggles for one product.
#[component]
pub fn PreferenceButtons(mut shop: Signal<AppShopState>, id: ProductId) -> Element {
    let preference = shop.read().preference(id);

    rsx! {
        div {
            class: "preference-buttons",
            Button {
                button_type: ButtonType::Primary,
                outline: !preference.is_liked(),
                pressed: preference.is_liked(),
                on_click: move |_| {
                    let now = shop.write().toggle_like(id);
                    dioxus_logger::tracing::info!("product {} is now {:?}", id, now);
                },
                if preference.is_liked() { "♥ Liked" } else { "♡ Like" }
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: !preference.is_disliked(),
                pressed: preference.is_disliked(),
                on_click: move |_| {
                    let now = shop.write().toggle_dislike(id);
                    dioxus_logger::tracing::info!("product {} is now {:?}", id, now);
                },
                if preference.is_disliked() { "✕ Disliked" } else { "✕ Dislike" }
            }
        }
    }
}
