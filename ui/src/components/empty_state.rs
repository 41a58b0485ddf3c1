// File: src/components/empty_state.rs
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Props)]
pub struct EmptyStateProps {
    title: String,
    #[props(default)]
    description: Option<String>,
    #[props(default)]
    primary_action: Option<Element>,
    #[props(default)]
    icon: Option<Element>,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                padding: 2rem;
                text-align: center;
                color: var(--pico-muted-color);
                border: 2px dashed var(--pico-card-border-color);
                border-radius: var(--pico-border-radius);
                margin: 1rem 0;
            ",

            if let Some(icon) = props.icon {
                div {
                    style: "font-size: 4rem; margin-bottom: 1rem; opacity: 0.8;",
                    {icon}
                }
            }

            h4 {
                style: "margin-bottom: 0.5rem;",
                "{props.title}"
            }

            if let Some(desc) = props.description {
                p {
                    style: "max-width: 400px; margin: 0 auto 1.5rem auto;",
                    "{desc}"
                }
            }

            if let Some(action) = props.primary_action {
                div {
                    {action}
                }
            }
        }
    }
}
