//! Reusable UI components

mod loading;
mod status_card;

pub use loading::*;
pub use status_card::*;
