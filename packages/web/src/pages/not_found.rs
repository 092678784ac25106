use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        main {
            class: "page",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { to: Route::Lookup {}, class: "link", "\u{2190} Back to member check" }
        }
    }
}
