//! RISC-V membership lookup.
//!
//! Confirms membership and GitHub team linkage for an email address without
//! the address ever leaving the caller. A refresh job publishes a table
//! keyed by SHA-256 of each normalized member email; this crate loads that
//! table once and answers queries against it locally.
//!
//! # Example
//!
//! ```rust,ignore
//! use membership::{TableLoader, TableSource};
//!
//! let source: TableSource = "https://members.example.org/data.json".parse()?;
//! let state = TableLoader::new(source).load().await;
//!
//! if let Some(status) = state.search("Alice@Example.com ").status() {
//!     println!("{}: {}", status.headline(), status.guidance());
//! }
//! ```
//!
//! The loader is behind the default `fetch` feature. Browser builds disable
//! it, fetch the file themselves, and hand the text to
//! [`LookupTable::from_json`].

pub mod email;
pub mod error;
#[cfg(feature = "fetch")]
pub mod loader;
pub mod query;
pub mod state;
pub mod status;
pub mod types;

pub use email::{normalize_email, validate_submission, EmailHash};
pub use error::{LoadError, QueryError, Result};
#[cfg(feature = "fetch")]
pub use loader::{TableLoader, TableSource};
pub use query::{search, Diagnostic, Outcome, QueryResult};
pub use state::TableState;
pub use status::MembershipStatus;
pub use types::{LookupTable, MembershipRecord};
