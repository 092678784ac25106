//! Root application component

use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{load_table, LookupContext};

/// Root application component
#[component]
pub fn App() -> Element {
    // Fetched exactly once per page load, never retried
    let table = use_resource(load_table);
    let state = use_memo(move || (*table.read()).clone().unwrap_or_default());

    use_context_provider(|| LookupContext { table: state });

    rsx! {
        document::Title { "RISC-V Member Check" }
        document::Stylesheet { href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
