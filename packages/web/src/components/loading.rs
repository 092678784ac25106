//! Loading components

use dioxus::prelude::*;

/// Inline loading indicator
#[component]
pub fn LoadingDots(label: String) -> Element {
    rsx! {
        div {
            class: "loading",
            div {
                class: "dots",
                span { class: "dot" }
                span { class: "dot", style: "animation-delay: 0.1s" }
                span { class: "dot", style: "animation-delay: 0.2s" }
            }
            p { class: "muted", "{label}" }
        }
    }
}
