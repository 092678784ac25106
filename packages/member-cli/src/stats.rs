//! Table summary for `member-check stats`.

use std::collections::HashMap;

use membership::{LookupTable, MembershipStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub last_updated: Option<String>,
    pub members: usize,
    pub github_linked: usize,
    pub by_status: Vec<(MembershipStatus, usize)>,
    /// Keys that are not SHA-256 digests and can never match
    pub unreachable_keys: usize,
}

impl TableSummary {
    pub fn of(table: &LookupTable) -> Self {
        let mut counts: HashMap<MembershipStatus, usize> = HashMap::new();
        for record in table.members.values() {
            *counts.entry(MembershipStatus::classify(record)).or_default() += 1;
        }

        Self {
            last_updated: table.last_synced_display(),
            members: table.len(),
            github_linked: table.members.values().filter(|r| r.has_github_id()).count(),
            by_status: MembershipStatus::variants()
                .iter()
                .map(|status| (*status, counts.get(status).copied().unwrap_or(0)))
                .collect(),
            unreachable_keys: table.malformed_keys(),
        }
    }

    pub fn count(&self, status: MembershipStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use membership::{EmailHash, MembershipRecord};

    fn record(github_id: &str, is_in_team: bool, invitation_sent: bool) -> MembershipRecord {
        MembershipRecord {
            github_id: github_id.into(),
            is_in_team,
            invitation_sent,
        }
    }

    #[test]
    fn test_counts_per_status() {
        let table = LookupTable::new(
            Some("2026-10-19T06:00:00Z".into()),
            [
                (EmailHash::of("a@x.org").to_string(), record("a", true, false)),
                (EmailHash::of("b@x.org").to_string(), record("b", true, false)),
                (EmailHash::of("c@x.org").to_string(), record("", false, false)),
                (EmailHash::of("d@x.org").to_string(), record("d", false, true)),
                ("d@x.org".to_string(), record("d", false, false)),
            ],
        );

        let summary = TableSummary::of(&table);

        assert_eq!(summary.members, 5);
        assert_eq!(summary.github_linked, 4);
        assert_eq!(summary.count(MembershipStatus::Active), 2);
        assert_eq!(summary.count(MembershipStatus::GithubNotLinked), 1);
        assert_eq!(summary.count(MembershipStatus::InvitationPending), 1);
        assert_eq!(summary.count(MembershipStatus::AwaitingSync), 1);
        assert_eq!(summary.unreachable_keys, 1);
        assert_eq!(summary.last_updated.as_deref(), Some("2026-10-19 06:00 UTC"));
    }

    #[test]
    fn test_empty_table_lists_every_status() {
        let summary = TableSummary::of(&LookupTable::default());

        assert_eq!(summary.members, 0);
        assert_eq!(summary.by_status.len(), 4);
        assert!(summary.by_status.iter().all(|(_, n)| *n == 0));
    }
}
