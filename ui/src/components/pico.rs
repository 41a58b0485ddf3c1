//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid of product cards.
#[component]
pub fn ProductGrid(children: Element) -> Element {
    rsx! { div { class: "product-grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
}

impl ButtonType {
    fn to_class(&self) -> &'static str {
        match self {
            ButtonType::Primary => "",
            ButtonType::Secondary => "secondary",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    /// Rendered as `aria-pressed` for toggle buttons.
    #[props(optional)]
    pressed: Option<bool>,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.outline, props.button_type.to_class()) {
        (true, "") => "outline".to_string(),
        (true, class) => format!("{class} outline"),
        (false, class) => class.to_string(),
    };
    rsx! {
        button {
            class: "{class_str}",
            "aria-pressed": props.pressed.map(|p| p.to_string()),
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
