// Terminal entry point for RISC-V member check

mod config;
mod output;
mod stats;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use membership::{validate_submission, TableLoader, TableSource, TableState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::output::CheckReport;
use crate::stats::TableSummary;

/// Exit status when the lookup table could not be loaded
const EXIT_TABLE_UNAVAILABLE: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "member-check",
    version,
    about = "Check RISC-V membership and GitHub team status by email"
)]
struct Cli {
    /// Lookup file location, URL or path (overrides MEMBERSHIP_DATA)
    #[arg(long, global = true)]
    data: Option<String>,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one or more email addresses
    Check {
        #[arg(required = true)]
        emails: Vec<String>,
    },
    /// Prompt for addresses until an empty line
    Interactive,
    /// Print the normalized form and hash of an address
    Hash { email: String },
    /// Summarize the lookup table
    Stats,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging on stderr so --json output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,member_cli=info,membership=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Cli {
        data,
        json,
        command,
    } = Cli::parse();

    let state = match command {
        Command::Hash { email } => {
            output::print_hash(&email);
            return Ok(ExitCode::SUCCESS);
        }
        Command::Check { emails } => {
            let state = load_configured(data).await?;
            check(&mut io::stdout().lock(), &state, &emails, json)?;
            state
        }
        Command::Interactive => {
            let state = load_configured(data).await?;
            interactive(&state)?;
            state
        }
        Command::Stats => {
            let state = load_configured(data).await?;
            stats(&state, json)?;
            state
        }
    };

    Ok(ExitCode::from(exit_status(&state)))
}

/// Process exit status for a run against `state`.
fn exit_status(state: &TableState) -> u8 {
    match state {
        TableState::Failed(_) => EXIT_TABLE_UNAVAILABLE,
        TableState::Ready(_) | TableState::Pending => 0,
    }
}

async fn load_configured(data: Option<String>) -> Result<TableState> {
    let config = Config::from_env()
        .context("Failed to load configuration")?
        .with_data(data);
    load_state(&config).await
}

async fn load_state(config: &Config) -> Result<TableState> {
    let source: TableSource = config
        .data
        .parse()
        .with_context(|| format!("Invalid data location: {}", config.data))?;

    let client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(TableLoader::new(source).with_client(client).load().await)
}

fn check(out: &mut impl Write, state: &TableState, emails: &[String], json: bool) -> Result<()> {
    let mut reports = Vec::new();
    if !json {
        output::print_banner(out, state)?;
    }

    for raw in emails {
        if validate_submission(raw).is_err() {
            tracing::warn!("Skipping blank email argument");
            continue;
        }

        let outcome = state.inspect(raw);
        if json {
            reports.push(serde_json::to_value(CheckReport::new(raw, &outcome))?);
        } else {
            output::print_outcome(out, raw, &outcome)?;
        }
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
    }
    Ok(())
}

fn interactive(state: &TableState) -> Result<()> {
    let term = Term::stdout();
    let mut out = term.clone();
    output::print_banner(&mut out, state)?;

    loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Email address (empty to quit)")
            .allow_empty(true)
            .interact_text_on(&term)?;

        // Blank input is a no-op in the web form; here it ends the session
        if validate_submission(&raw).is_err() {
            println!("{}", "Goodbye!".bright_blue());
            break;
        }

        output::print_outcome(&mut out, &raw, &state.inspect(&raw))?;
    }

    Ok(())
}

fn stats(state: &TableState, json: bool) -> Result<()> {
    let Some(table) = state.table() else {
        eprintln!("{}", "Lookup table could not be loaded.".bright_red());
        return Ok(());
    };

    let summary = TableSummary::of(table);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        output::print_summary(&summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use membership::{EmailHash, LookupTable, MembershipRecord};

    #[test]
    fn test_parse_check_with_global_flags() {
        let cli = Cli::try_parse_from([
            "member-check",
            "check",
            "alice@example.com",
            "bob@example.com",
            "--json",
            "--data",
            "https://members.example.org/data.json",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.data.as_deref(), Some("https://members.example.org/data.json"));
        match cli.command {
            Command::Check { emails } => assert_eq!(emails.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_check_requires_an_email() {
        assert!(Cli::try_parse_from(["member-check", "check"]).is_err());
    }

    #[test]
    fn test_parse_hash() {
        let cli = Cli::try_parse_from(["member-check", "hash", "Alice@Example.com"]).unwrap();
        assert!(matches!(cli.command, Command::Hash { email } if email == "Alice@Example.com"));
    }

    #[tokio::test]
    async fn test_missing_file_loads_as_failed() {
        let config = Config {
            data: "/nonexistent/membership/data.json".into(),
            http_timeout: std::time::Duration::from_secs(1),
        };

        let state = load_state(&config).await.unwrap();
        assert!(matches!(state, TableState::Failed(_)));
    }

    fn alice_table() -> TableState {
        LookupTable::new(
            Some("2026-10-19T06:00:00Z".into()),
            [(
                EmailHash::of("alice@example.com").to_string(),
                MembershipRecord {
                    github_id: "alice-gh".into(),
                    is_in_team: true,
                    invitation_sent: false,
                },
            )],
        )
        .into()
    }

    fn run_check(state: &TableState, emails: &[&str], json: bool) -> String {
        let emails: Vec<String> = emails.iter().map(|e| e.to_string()).collect();
        let mut out = Vec::new();
        check(&mut out, state, &emails, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_check_skips_blank_arguments() {
        let output = run_check(&alice_table(), &["", "   ", "alice@example.com"], true);
        let reports: serde_json::Value = serde_json::from_str(&output).unwrap();

        let reports = reports.as_array().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["email"], "alice@example.com");

        let output = run_check(&alice_table(), &["", "\t"], true);
        assert_eq!(output.trim(), "[]");
    }

    #[test]
    fn test_check_with_loaded_table() {
        let state = alice_table();
        let output = run_check(&state, &["Alice@Example.com", "eve@example.com"], true);
        let reports: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(reports[0]["lookup"]["result"], "found");
        assert_eq!(reports[0]["lookup"]["record"]["github_id"], "alice-gh");
        assert_eq!(reports[0]["status"], "active");
        assert_eq!(reports[0]["diagnostic"], "matched");

        assert_eq!(reports[1]["lookup"]["result"], "not_found");
        assert!(reports[1]["status"].is_null());
        assert_eq!(reports[1]["diagnostic"], "not_in_table");

        assert_eq!(exit_status(&state), 0);
    }

    #[test]
    fn test_check_with_failed_table() {
        let state = TableState::Failed("HTTP 404 fetching https://example.com/data.json".into());
        let output = run_check(&state, &["alice@example.com"], true);
        let reports: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(reports.as_array().unwrap().len(), 1);
        assert_eq!(reports[0]["lookup"]["result"], "not_found");
        assert_eq!(reports[0]["diagnostic"], "table_unavailable");

        assert_eq!(exit_status(&state), EXIT_TABLE_UNAVAILABLE);
    }

    #[test]
    fn test_check_text_warns_when_table_failed() {
        let state = TableState::Failed("connection refused".into());
        let output = run_check(&state, &["alice@example.com"], false);

        assert!(output.contains("Membership data unavailable: connection refused"));
        assert!(output.contains("No membership record found for this address."));
        assert!(output.contains("this result is not reliable"));
    }
}
