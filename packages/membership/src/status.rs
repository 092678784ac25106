//! GitHub linkage classification for a found member.

use serde::Serialize;

use crate::types::MembershipRecord;

/// Where a known member stands with the GitHub team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    /// No GitHub username on the member profile
    GithubNotLinked,
    /// Team invitation issued, not yet accepted
    InvitationPending,
    /// Username linked, team sync has not run yet
    AwaitingSync,
    /// On the GitHub team
    Active,
}

impl MembershipStatus {
    /// Classify a record.
    ///
    /// A missing GitHub username wins over everything else, then team
    /// membership, then a pending invitation.
    pub fn classify(record: &MembershipRecord) -> Self {
        if !record.has_github_id() {
            MembershipStatus::GithubNotLinked
        } else if record.is_in_team {
            MembershipStatus::Active
        } else if record.invitation_sent {
            MembershipStatus::InvitationPending
        } else {
            MembershipStatus::AwaitingSync
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            MembershipStatus::GithubNotLinked => "GitHub username not linked",
            MembershipStatus::InvitationPending => "GitHub team invitation pending",
            MembershipStatus::AwaitingSync => "Linked, not yet synced to the GitHub team",
            MembershipStatus::Active => "Fully active",
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            MembershipStatus::GithubNotLinked => {
                "You are a RISC-V member, but no GitHub username is recorded on your profile. \
                 Add it in your member profile to be invited to the GitHub team."
            }
            MembershipStatus::InvitationPending => {
                "An invitation to the GitHub team has been sent. Check your GitHub \
                 notifications or email and accept it to complete setup."
            }
            MembershipStatus::AwaitingSync => {
                "Your GitHub username is linked but has not been added to the team yet. \
                 The sync runs periodically and can take a few hours; check back later."
            }
            MembershipStatus::Active => {
                "You are a RISC-V member and your GitHub account is on the team. \
                 No action is needed."
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MembershipStatus::GithubNotLinked => "\u{1F517}",   // 🔗
            MembershipStatus::InvitationPending => "\u{2709}",  // ✉
            MembershipStatus::AwaitingSync => "\u{23F3}",       // ⏳
            MembershipStatus::Active => "\u{2705}",             // ✅
        }
    }

    pub fn variants() -> &'static [MembershipStatus] {
        &[
            MembershipStatus::GithubNotLinked,
            MembershipStatus::InvitationPending,
            MembershipStatus::AwaitingSync,
            MembershipStatus::Active,
        ]
    }
}
