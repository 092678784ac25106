//! Load lifecycle of the lookup table.

use std::sync::Arc;

use crate::error::LoadError;
use crate::query::{lookup, Diagnostic, Outcome, QueryResult};
use crate::types::LookupTable;

/// The table as seen by the query path.
///
/// Starts `Pending`, becomes `Ready` or `Failed` exactly once. Cloning is
/// cheap; the table itself is shared and never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TableState {
    #[default]
    Pending,
    Ready(Arc<LookupTable>),
    Failed(String),
}

impl TableState {
    /// Fold a load attempt into a state, logging the failure.
    pub fn from_load(result: Result<LookupTable, LoadError>) -> Self {
        match result {
            Ok(table) => {
                tracing::info!(
                    members = table.len(),
                    last_updated = table.last_updated.as_deref().unwrap_or("unknown"),
                    "Lookup table loaded"
                );
                TableState::Ready(Arc::new(table))
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load lookup table");
                TableState::Failed(e.to_string())
            }
        }
    }

    pub fn table(&self) -> Option<&LookupTable> {
        match self {
            TableState::Ready(table) => Some(table.as_ref()),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TableState::Pending)
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.table()?.last_updated.as_deref()
    }

    /// Look up a raw form value. See [`crate::search`].
    pub fn search(&self, raw: &str) -> QueryResult {
        self.inspect(raw).result
    }

    /// Look up a raw form value and report why it resolved the way it did.
    pub fn inspect(&self, raw: &str) -> Outcome {
        let (result, diagnostic) = match self {
            TableState::Pending => (QueryResult::NotFound, Diagnostic::TablePending),
            TableState::Failed(_) => (QueryResult::NotFound, Diagnostic::TableUnavailable),
            TableState::Ready(table) => {
                let (result, hash) = lookup(table, raw);
                let diagnostic = if result.is_found() {
                    Diagnostic::Matched
                } else {
                    Diagnostic::NotInTable
                };
                tracing::debug!(hash = hash.short(), ?diagnostic, "Lookup");
                return Outcome { result, diagnostic };
            }
        };

        tracing::debug!(?diagnostic, "Lookup without a table");
        Outcome { result, diagnostic }
    }
}

impl From<LookupTable> for TableState {
    fn from(table: LookupTable) -> Self {
        TableState::Ready(Arc::new(table))
    }
}
