//! Query engine: normalize, hash, look up.

use serde::Serialize;

use crate::email::{normalize_email, EmailHash};
use crate::status::MembershipStatus;
use crate::types::{LookupTable, MembershipRecord};

/// Result of one lookup, exactly as the user sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", content = "record", rename_all = "snake_case")]
pub enum QueryResult {
    NotFound,
    Found(MembershipRecord),
}

impl QueryResult {
    pub fn is_found(&self) -> bool {
        matches!(self, QueryResult::Found(_))
    }

    pub fn record(&self) -> Option<&MembershipRecord> {
        match self {
            QueryResult::Found(record) => Some(record),
            QueryResult::NotFound => None,
        }
    }

    pub fn status(&self) -> Option<MembershipStatus> {
        self.record().map(MembershipStatus::classify)
    }
}

/// Why a lookup came out the way it did.
///
/// Load failures and genuine non-members both produce
/// [`QueryResult::NotFound`]; this tells them apart for logs and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnostic {
    Matched,
    NotInTable,
    TablePending,
    TableUnavailable,
}

/// A query result together with its diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub result: QueryResult,
    pub diagnostic: Diagnostic,
}

/// Look up a raw form value in `table`.
///
/// A missing table (still loading, or failed) behaves like an empty one.
/// Never fails: input that is not an email just matches nothing.
pub fn search(table: Option<&LookupTable>, raw: &str) -> QueryResult {
    match table {
        Some(table) => lookup(table, raw).0,
        None => QueryResult::NotFound,
    }
}

pub(crate) fn lookup(table: &LookupTable, raw: &str) -> (QueryResult, EmailHash) {
    let hash = EmailHash::of_normalized(&normalize_email(raw));
    let result = match table.get(&hash) {
        Some(record) => QueryResult::Found(record.clone()),
        None => QueryResult::NotFound,
    };
    (result, hash)
}
