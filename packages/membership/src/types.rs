//! Lookup file data model.
//!
//! Mirrors the `data.json` document written by the refresh job:
//!
//! ```json
//! {
//!   "last_updated": "2026-10-19T06:00:00Z",
//!   "members": {
//!     "<sha256 of lowercased, trimmed email>": {
//!       "github_id": "alice-gh",
//!       "is_in_team": true,
//!       "invitation_sent": false
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::email::EmailHash;
use crate::error::{LoadError, Result};

/// Membership and GitHub team state for one member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipRecord {
    /// Declared GitHub username, empty when the member never linked one.
    #[serde(default)]
    pub github_id: String,
    pub is_in_team: bool,
    /// Absent from files written before invitations were tracked.
    #[serde(default)]
    pub invitation_sent: bool,
}

impl MembershipRecord {
    pub fn has_github_id(&self) -> bool {
        !self.github_id.is_empty()
    }
}

/// Hash-keyed membership table plus the time it was generated.
///
/// Built once per refresh run elsewhere and treated as read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTable {
    pub last_updated: Option<String>,
    pub members: HashMap<String, MembershipRecord>,
}

/// Shapes the refresh job has written over time.
enum LookupFile {
    Current(CurrentFile),
    // Early runs dumped the member map with no envelope
    Legacy(HashMap<String, MembershipRecord>),
}

#[derive(Deserialize)]
struct CurrentFile {
    #[serde(default)]
    last_updated: Option<String>,
    members: HashMap<String, MembershipRecord>,
}

impl LookupFile {
    /// A top-level `members` key selects the current shape, so its errors
    /// are reported as they are instead of being retried as a bare map.
    fn parse(contents: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(contents)?;

        if value.get("members").is_some() {
            return Ok(LookupFile::Current(serde_json::from_value(value)?));
        }
        if value.as_object().is_some_and(|object| object.is_empty()) {
            return Err(LoadError::Parse(serde::de::Error::custom(
                "empty document, expected `members` or member records",
            )));
        }
        Ok(LookupFile::Legacy(serde_json::from_value(value)?))
    }
}

impl From<LookupFile> for LookupTable {
    fn from(file: LookupFile) -> Self {
        match file {
            LookupFile::Current(CurrentFile {
                last_updated,
                members,
            }) => Self {
                last_updated,
                members,
            },
            LookupFile::Legacy(members) => Self {
                last_updated: None,
                members,
            },
        }
    }
}

impl LookupTable {
    pub fn new(
        last_updated: Option<String>,
        members: impl IntoIterator<Item = (String, MembershipRecord)>,
    ) -> Self {
        Self {
            last_updated,
            members: members.into_iter().collect(),
        }
    }

    /// Parse the contents of a lookup file.
    pub fn from_json(contents: &str) -> Result<Self> {
        let table = Self::from(LookupFile::parse(contents)?);

        let malformed = table.malformed_keys();
        if malformed > 0 {
            tracing::warn!(
                malformed,
                total = table.len(),
                "Lookup file contains keys that are not SHA-256 hex digests"
            );
        }

        Ok(table)
    }

    pub fn get(&self, hash: &EmailHash) -> Option<&MembershipRecord> {
        self.members.get(hash.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// `last_updated` as a timestamp, when it is valid RFC 3339.
    pub fn last_synced(&self) -> Option<DateTime<Utc>> {
        let raw = self.last_updated.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|ts| ts.with_timezone(&Utc))
            .ok()
    }

    /// Human-readable sync time: the parsed timestamp, else the raw string.
    pub fn last_synced_display(&self) -> Option<String> {
        match self.last_synced() {
            Some(ts) => Some(ts.format("%Y-%m-%d %H:%M UTC").to_string()),
            None => self.last_updated.clone(),
        }
    }

    /// Count of keys no query can ever reach.
    pub fn malformed_keys(&self) -> usize {
        self.members
            .keys()
            .filter(|key| !EmailHash::is_well_formed(key))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "ff8d9819fc0e12bf0d24892e45987e249a28dce836a85cad60e28eaaa8c6d976";

    #[test]
    fn test_parse_current_format() {
        let json = format!(
            r#"{{
                "last_updated": "2026-10-19T06:00:00Z",
                "members": {{
                    "{ALICE}": {{ "github_id": "alice-gh", "is_in_team": true, "invitation_sent": false }}
                }}
            }}"#
        );

        let table = LookupTable::from_json(&json).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.last_updated.as_deref(), Some("2026-10-19T06:00:00Z"));
        let record = table.get(&EmailHash::of("alice@example.com")).unwrap();
        assert_eq!(record.github_id, "alice-gh");
        assert!(record.is_in_team);
        assert!(!record.invitation_sent);
    }

    #[test]
    fn test_parse_legacy_bare_map() {
        let json = format!(r#"{{ "{ALICE}": {{ "github_id": "alice-gh", "is_in_team": false }} }}"#);

        let table = LookupTable::from_json(&json).unwrap();

        assert_eq!(table.last_updated, None);
        let record = table.get(&EmailHash::of("alice@example.com")).unwrap();
        assert!(!record.invitation_sent);
    }

    #[test]
    fn test_parse_empty_members() {
        let table =
            LookupTable::from_json(r#"{ "last_updated": "2026-01-01T00:00:00Z", "members": {} }"#)
                .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(LookupTable::from_json("<html>404</html>").is_err());
        assert!(LookupTable::from_json(r#"{ "members": [1, 2, 3] }"#).is_err());
        assert!(LookupTable::from_json(r#"["a", "b"]"#).is_err());
    }

    #[test]
    fn test_parse_reports_missing_field() {
        let err = LookupTable::from_json(
            r#"{ "last_updated": "x", "members": { "ab": { "github_id": "a" } } }"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("is_in_team"), "{err}");
    }

    #[test]
    fn test_parse_rejects_empty_document() {
        let err = LookupTable::from_json("{}").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_last_synced_parses_rfc3339() {
        let table = LookupTable {
            last_updated: Some("2026-10-19T06:30:00+02:00".into()),
            ..Default::default()
        };

        let ts = table.last_synced().unwrap();
        assert_eq!(ts.to_rfc3339(), "2026-10-19T04:30:00+00:00");
        assert_eq!(table.last_synced_display().as_deref(), Some("2026-10-19 04:30 UTC"));
    }

    #[test]
    fn test_last_synced_falls_back_to_raw_string() {
        let table = LookupTable {
            last_updated: Some("yesterday-ish".into()),
            ..Default::default()
        };

        assert!(table.last_synced().is_none());
        assert_eq!(table.last_synced_display().as_deref(), Some("yesterday-ish"));
        assert_eq!(LookupTable::default().last_synced_display(), None);
    }

    #[test]
    fn test_malformed_keys_counted() {
        let table = LookupTable::new(
            None,
            [
                (ALICE.to_string(), MembershipRecord::default()),
                ("alice@example.com".to_string(), MembershipRecord::default()),
                (ALICE.to_uppercase(), MembershipRecord::default()),
            ],
        );

        assert_eq!(table.malformed_keys(), 2);
    }
}
