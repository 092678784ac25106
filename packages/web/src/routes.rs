//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{Lookup, PageNotFound};

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Lookup {},

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
