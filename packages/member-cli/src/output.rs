//! Terminal rendering.

use std::io::{self, Write};

use colored::Colorize;
use membership::{
    normalize_email, Diagnostic, EmailHash, MembershipStatus, Outcome, QueryResult, TableState,
};
use serde::Serialize;

use crate::stats::TableSummary;

/// `--json` shape of one check.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub email: String,
    pub hash: String,
    pub lookup: &'a QueryResult,
    pub status: Option<MembershipStatus>,
    pub diagnostic: Diagnostic,
}

impl<'a> CheckReport<'a> {
    pub fn new(raw: &str, outcome: &'a Outcome) -> Self {
        let email = normalize_email(raw);
        Self {
            hash: EmailHash::of_normalized(&email).to_string(),
            email,
            lookup: &outcome.result,
            status: outcome.result.status(),
            diagnostic: outcome.diagnostic,
        }
    }
}

pub fn print_banner(out: &mut impl Write, state: &TableState) -> io::Result<()> {
    writeln!(out, "{}", "RISC-V Member Check".bright_cyan().bold())?;
    match state {
        TableState::Ready(table) => {
            let synced = table
                .last_synced_display()
                .unwrap_or_else(|| "unknown".to_string());
            writeln!(out, "{}", format!("Data last synced: {}", synced).dimmed())?;
        }
        TableState::Failed(reason) => {
            writeln!(
                out,
                "{}",
                format!("Membership data unavailable: {}", reason).bright_red()
            )?;
        }
        TableState::Pending => {}
    }
    writeln!(out)
}

pub fn print_outcome(out: &mut impl Write, raw: &str, outcome: &Outcome) -> io::Result<()> {
    let email = normalize_email(raw);

    match &outcome.result {
        QueryResult::NotFound => {
            writeln!(out, "{} {}", "✗".bright_red().bold(), email.bold())?;
            writeln!(
                out,
                "  {}",
                "No membership record found for this address.".bright_red()
            )?;
            writeln!(
                out,
                "  {}",
                "Make sure you entered the address registered with RISC-V International.".dimmed()
            )?;
            if outcome.diagnostic == Diagnostic::TableUnavailable {
                writeln!(
                    out,
                    "  {}",
                    "(membership data could not be loaded, this result is not reliable)"
                        .yellow()
                )?;
            }
        }
        QueryResult::Found(record) => {
            let status = MembershipStatus::classify(record);
            let headline = match status {
                MembershipStatus::Active => status.headline().bright_green().bold(),
                MembershipStatus::GithubNotLinked => status.headline().bright_yellow().bold(),
                MembershipStatus::InvitationPending | MembershipStatus::AwaitingSync => {
                    status.headline().bright_blue().bold()
                }
            };

            writeln!(out, "{} {}", "✓".bright_green().bold(), email.bold())?;
            writeln!(out, "  {} {}", status.icon(), headline)?;
            if record.has_github_id() {
                writeln!(out, "  GitHub: {}", record.github_id.cyan())?;
            }
            writeln!(out, "  {}", status.guidance())?;
        }
    }
    writeln!(out)
}

pub fn print_hash(raw: &str) {
    let normalized = normalize_email(raw);
    println!("{} {}", "normalized:".dimmed(), normalized);
    println!("{} {}", "sha256:    ".dimmed(), EmailHash::of_normalized(&normalized));
}

pub fn print_summary(summary: &TableSummary) {
    println!("{}", "Lookup table".bright_cyan().bold());
    println!(
        "  Last synced:      {}",
        summary.last_updated.as_deref().unwrap_or("unknown")
    );
    println!("  Members:          {}", summary.members);
    println!("  GitHub linked:    {}", summary.github_linked);
    for (status, count) in &summary.by_status {
        println!("  {} {:<42} {}", status.icon(), status.headline(), count);
    }
    if summary.unreachable_keys > 0 {
        println!(
            "  {}",
            format!("Unreachable keys: {}", summary.unreachable_keys).yellow()
        );
    }
}
