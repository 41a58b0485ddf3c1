//! Shared components used by the screens.
pub mod category_bar;
pub mod empty_state;
pub mod pico;
pub mod preference_buttons;
pub mod product_card;
