use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use api::filter::CategoryFilter;
use api::AppShopState;
use dioxus::prelude::*;

/// One button per category plus "All". The active filter is not outlined.
#[component]
pub fn CategoryBar(mut shop: Signal<AppShopState>) -> Element {
    let current = shop.read().filter().clone();
    let filters: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
        .chain(
            shop.read()
                .categories()
                .iter()
                .map(|c| CategoryFilter::Category(c.clone())),
        )
        .collect();

    rsx! {
        div {
            class: "category-bar",
            for filter in filters {
                Button {
                    key: "{filter.label()}",
                    button_type: ButtonType::Secondary,
                    outline: filter != current,
                    pressed: filter == current,
                    on_click: {
                        let filter = filter.clone();
                        move |_| shop.write().set_filter(filter.clone())
                    },
                    "{filter.label()}"
                }
            }
        }
    }
}
