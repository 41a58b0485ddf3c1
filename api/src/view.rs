//! Which screen is showing, and the product the detail screen shows.

use crate::product::Product;

/// The screens of the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum View {
    #[default]
    Home,
    Listing,
    Favorites,
    Detail,
}

impl View {
    /// Views reachable from the tab bar. `Detail` is entered from a product.
    pub const ALL: [View; 3] = [View::Home, View::Listing, View::Favorites];

    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Listing => "All Products",
            View::Favorites => "Favorites",
            View::Detail => "Product",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct ViewState {
    view: View,
    selected: Option<Product>,
}

impl ViewState {
    /// Switches to `view`. `product` is recorded only when entering
    /// [`View::Detail`]; the previous selection is otherwise kept.
    pub fn navigate(&mut self, view: View, product: Option<Product>) {
        self.view = view;
        if view.is_detail() {
            if let Some(product) = product {
                self.selected = Some(product);
            }
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The product the detail screen should show.
    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }
}
