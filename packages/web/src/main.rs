//! RISC-V Member Check - Dioxus web form
//!
//! Loads the hashed membership table once and answers every lookup in the
//! browser. The email address never leaves the page.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web
//! ```
//!
//! The refresh job writes `public/data.json`; override the path the page
//! fetches with `MEMBERSHIP_DATA_PATH` at build time.

#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod routes;
mod state;

fn main() {
    // Initialize logging (the browser build uses the Dioxus logger)
    #[cfg(feature = "server")]
    tracing_subscriber::fmt::init();

    dioxus::launch(app::App);
}
