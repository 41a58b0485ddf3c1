use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let config = api::config::ShopConfig::from_env();
    dioxus_logger::tracing::info!(
        "catalog at {}, preferences in {}",
        config.catalog_base_url,
        config.prefs_file
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
