// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use api::catalog::CatalogStatus;
use api::config::ShopConfig;
use api::view::View;
use api::AppShopState;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Card;
use components::pico::Container;
use screens::detail::DetailScreen;
use screens::favorites::FavoritesScreen;
use screens::home::HomeScreen;
use screens::listing::ListingScreen;

/// The tab bar.
#[component]
fn Tabs(mut shop: Signal<AppShopState>) -> Element {
    let active = shop.read().view().view();
    let favorites_count = shop.read().preferences().liked().len();

    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for view in View::ALL {
                    li {
                        a {
                            href: "#",
                            class: if active == view { "active-tab" } else { "" },
                            "aria-current": if active == view { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                shop.write().navigate(view, None);
                            },
                            if view.is_favorites() && favorites_count > 0 {
                                "{view.name()} ({favorites_count})"
                            } else {
                                "{view.name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    .product-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
        gap: 1rem;
    }

    .product-grid article { margin: 0; display: flex; flex-direction: column; }
    .product-grid img { height: 160px; object-fit: contain; margin-bottom: 0.5rem; }
    .product-title { cursor: pointer; font-weight: bold; }

    .category-bar { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
    .category-bar button { margin: 0; padding: 0.25rem 0.75rem; }

    .preference-buttons { display: flex; gap: 0.5rem; margin-top: auto; }
    .preference-buttons button { flex: 1; margin: 0; }
    .preference-buttons button[aria-pressed="true"] { font-weight: bold; }

    .detail-layout { display: grid; grid-template-columns: minmax(200px, 1fr) 2fr; gap: 2rem; }
    .detail-layout img { max-height: 400px; object-fit: contain; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let config = use_hook(ShopConfig::from_env);

    // The one state object for the whole app. It is passed to every screen
    // by prop; writes to the signal re-render its readers.
    let shop_config = config.clone();
    let mut shop = use_signal(move || {
        let mut state = api::new_shop_state(&shop_config);
        state.subscribe(|change| {
            dioxus_logger::tracing::debug!("state changed: {:?}", change);
        });
        state
    });

    // Restarting the resource drops the in-flight load; the ticket guards
    // against a completion that still slips through.
    let mut catalog_load = use_resource(move || {
        let config = config.clone();
        async move {
            let ticket = shop.write().begin_load();
            let result = api::fetch_catalog(&config).await;
            shop.write().finish_load(ticket, result);
        }
    });

    let status = shop.read();
    match status.catalog_status() {
        CatalogStatus::Loading => rsx! {
            Container {
                Card {
                    h3 { "Products" }
                    p { "Loading..." }
                    progress {}
                }
            }
        },
        CatalogStatus::Failed(message) => rsx! {
            Container {
                Card {
                    h3 { "Error" }
                    p { "{message}" }
                    Button {
                        button_type: ButtonType::Primary,
                        on_click: move |_| catalog_load.restart(),
                        "Retry"
                    }
                }
            }
        },
        CatalogStatus::Loaded(_) => rsx! {
            LoadedApp { shop }
        },
    }
}

/// This component holds the main app layout and only runs when data is ready.
#[component]
fn LoadedApp(shop: Signal<AppShopState>) -> Element {
    let view = shop.read().view().view();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li {
                                strong { "Product Feed" }
                            }
                        }
                        ul {
                            li {
                                Tabs { shop }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match view {
                        View::Home => rsx! {
                            HomeScreen { shop }
                        },
                        View::Listing => rsx! {
                            ListingScreen { shop }
                        },
                        View::Favorites => rsx! {
                            FavoritesScreen { shop }
                        },
                        View::Detail => rsx! {
                            DetailScreen { shop }
                        },
                    }
                }
            }
        }
    }
}
