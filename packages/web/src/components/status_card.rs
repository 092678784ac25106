//! Lookup result cards

use dioxus::prelude::*;
use membership::{MembershipRecord, MembershipStatus};

/// Where members edit their profile, including the GitHub username field
const PROFILE_URL: &str = match option_env!("MEMBERSHIP_PROFILE_URL") {
    Some(url) => url,
    None => "https://lists.riscv.org",
};

struct StatusStyles {
    tone: &'static str,
    badge: &'static str,
}

fn get_status_styles(status: MembershipStatus) -> StatusStyles {
    match status {
        MembershipStatus::Active => StatusStyles {
            tone: "card card-success",
            badge: "Member \u{00B7} GitHub team",
        },
        MembershipStatus::InvitationPending => StatusStyles {
            tone: "card card-info",
            badge: "Member \u{00B7} invitation sent",
        },
        MembershipStatus::AwaitingSync => StatusStyles {
            tone: "card card-info",
            badge: "Member \u{00B7} sync pending",
        },
        MembershipStatus::GithubNotLinked => StatusStyles {
            tone: "card card-warning",
            badge: "Member \u{00B7} no GitHub link",
        },
    }
}

/// Props for StatusCard
#[derive(Props, Clone, PartialEq)]
pub struct StatusCardProps {
    pub email: String,
    pub record: MembershipRecord,
}

/// Result card for a found member
#[component]
pub fn StatusCard(props: StatusCardProps) -> Element {
    let record = &props.record;
    let status = MembershipStatus::classify(record);
    let styles = get_status_styles(status);

    rsx! {
        div {
            class: "{styles.tone}",

            div {
                class: "card-header",
                span { class: "icon", "{status.icon()}" }
                div {
                    h2 { "{status.headline()}" }
                    span { class: "badge", "{styles.badge}" }
                }
            }

            p { class: "email", "{props.email}" }

            if record.has_github_id() {
                p {
                    class: "github",
                    "GitHub: "
                    a {
                        href: "https://github.com/{record.github_id}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "@{record.github_id}"
                    }
                }
            }

            p { "{status.guidance()}" }

            if status == MembershipStatus::GithubNotLinked {
                a {
                    href: PROFILE_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "button",
                    "Update your profile"
                }
            }
        }
    }
}

/// Result card for an address with no record
#[component]
pub fn NotFoundCard(email: String) -> Element {
    rsx! {
        div {
            class: "card card-error",
            div {
                class: "card-header",
                span { class: "icon", "\u{274C}" }
                h2 { "No membership found" }
            }
            p { class: "email", "{email}" }
            p {
                "We could not find a RISC-V membership for this address. Check for typos, "
                "or try the address you registered with."
            }
        }
    }
}
