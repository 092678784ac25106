//! Member check page

use dioxus::prelude::*;
use membership::{normalize_email, validate_submission, QueryResult, TableState};

use crate::components::{LoadingDots, NotFoundCard, StatusCard};
use crate::state::LookupContext;

/// Pause before showing a result so repeated checks read as fresh
#[cfg(feature = "web")]
const CHECK_DELAY_MS: u32 = 400;

/// Member check page - hashes the address locally and looks it up
#[component]
pub fn Lookup() -> Element {
    let LookupContext { table } = use_context::<LookupContext>();

    let mut email = use_signal(String::new);
    let mut checked = use_signal(|| None::<(String, QueryResult)>);
    let mut is_checking = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(address) = submitted_address(&email()) else {
            return;
        };

        spawn(async move {
            is_checking.set(true);
            checked.set(None);

            checking_delay().await;

            // Read at resolve time so a table that finished loading meanwhile is used
            let outcome = table.read().inspect(&address);
            checked.set(Some((address, outcome.result)));
            is_checking.set(false);
        });
    };

    rsx! {
        div {
            class: "page",

            header {
                h1 { "RISC-V Member Check" }
                p {
                    class: "muted",
                    "Confirm your RISC-V membership and GitHub team status. "
                    "Your email is hashed in the browser and never sent anywhere."
                }
            }

            form {
                class: "lookup-form",
                onsubmit: handle_submit,
                // Plain text so the browser neither blocks nor rewrites the address
                input {
                    r#type: "text",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                    placeholder: "you@example.com",
                    autocomplete: "email",
                }
                button {
                    r#type: "submit",
                    disabled: is_checking() || email().trim().is_empty(),
                    if is_checking() { "Checking..." } else { "Check" }
                }
            }

            main {
                if is_checking() {
                    LoadingDots { label: "Checking membership...".to_string() }
                } else if let Some((address, result)) = checked() {
                    {match result {
                        QueryResult::Found(record) => rsx! {
                            StatusCard { email: address, record: record }
                        },
                        QueryResult::NotFound => rsx! {
                            NotFoundCard { email: address }
                        },
                    }}
                }
            }

            SyncFooter { table: table() }
        }
    }
}

/// Address to look up for a form value, or `None` for a blank submission.
///
/// Any other input is accepted as typed; an address that is not a real email
/// simply finds no record.
fn submitted_address(raw: &str) -> Option<String> {
    validate_submission(raw).ok().map(normalize_email)
}

#[component]
fn SyncFooter(table: TableState) -> Element {
    rsx! {
        footer {
            class: "muted",
            {match table {
                TableState::Pending => rsx! { "Loading membership data..." },
                TableState::Ready(table) => {
                    let synced = table.last_synced_display().unwrap_or_else(|| "unknown".to_string());
                    rsx! { "Data last synced: {synced}" }
                }
                // Shown the same as a miss to visitors; details are in the console log
                TableState::Failed(_) => rsx! {},
            }}
        }
    }
}

#[cfg(feature = "web")]
async fn checking_delay() {
    gloo_timers::future::TimeoutFuture::new(CHECK_DELAY_MS).await;
}

#[cfg(not(feature = "web"))]
async fn checking_delay() {}
