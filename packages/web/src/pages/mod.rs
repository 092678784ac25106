//! Pages

mod lookup;
mod not_found;

pub use lookup::*;
pub use not_found::*;
