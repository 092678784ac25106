//! Lookup table state shared with the pages

use dioxus::prelude::*;
use membership::TableState;

/// Path of the lookup file, relative to the page
pub const DATA_PATH: &str = match option_env!("MEMBERSHIP_DATA_PATH") {
    Some(path) => path,
    None => "data.json",
};

/// Table state provided by [`App`](crate::app::App)
#[derive(Clone, Copy)]
pub struct LookupContext {
    pub table: Memo<TableState>,
}

/// Fetch and parse the lookup file.
#[cfg(feature = "web")]
pub async fn load_table() -> TableState {
    tracing::info!(path = DATA_PATH, "Loading lookup table");
    TableState::from_load(fetch_table(DATA_PATH).await)
}

#[cfg(feature = "web")]
async fn fetch_table(path: &str) -> Result<membership::LookupTable, membership::LoadError> {
    use gloo_net::http::Request;
    use membership::{LoadError, LookupTable};

    let resp = Request::get(path)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(LoadError::Http {
            status: resp.status(),
            url: resp.url(),
        });
    }

    let body = resp
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    LookupTable::from_json(&body)
}

/// Server render: the browser loads the table after hydration.
#[cfg(not(feature = "web"))]
pub async fn load_table() -> TableState {
    TableState::Pending
}
