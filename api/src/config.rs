//! Runtime configuration.

use std::env;

/// Where the catalog comes from and where preferences are kept.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ShopConfig {
    /// Base address of the catalog service, without trailing slash.
    pub catalog_base_url: String,

    /// File holding persisted preferences on native targets. Unused in the
    /// browser, which uses `localStorage`.
    pub prefs_file: String,
}

impl ShopConfig {
    pub const DEFAULT_CATALOG_BASE_URL: &'static str = "https://fakestoreapi.com";
    pub const DEFAULT_PREFS_FILE: &'static str = "product-prefs.json";

    /// Creates a config from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `CATALOG_BASE_URL`: base address of the catalog service.
    /// - `PREFS_FILE`: path of the native preferences file.
    ///
    /// The browser has no process environment, so wasm builds read the same
    /// names at compile time.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            env::var(name).ok().or_else(|| compile_time_var(name).map(str::to_string))
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let catalog_base_url = lookup("CATALOG_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| Self::DEFAULT_CATALOG_BASE_URL.to_string());

        let prefs_file = lookup("PREFS_FILE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_PREFS_FILE.to_string());

        Self {
            catalog_base_url,
            prefs_file,
        }
    }
}

fn compile_time_var(name: &str) -> Option<&'static str> {
    match name {
        "CATALOG_BASE_URL" => option_env!("CATALOG_BASE_URL"),
        "PREFS_FILE" => option_env!("PREFS_FILE"),
        _ => None,
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
