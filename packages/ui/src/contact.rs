use api::types::{ContactError, ContactForm};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use std::time::Duration;

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

/// How long the confirmation stays up before the form resets.
const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Sent,
    /// Catalog key of the message to show.
    Failed(&'static str),
}

/// Whether the reset timer of submission `ticket` may still clear the
/// confirmation. A newer submission takes over the status.
pub fn reset_is_current(status: SubmitStatus, ticket: u64, latest: u64) -> bool {
    status == SubmitStatus::Sent && ticket == latest
}

/// Catalog key for a server-side rejection, falling back to the generic failure.
pub fn failure_key(server_message: &str) -> &'static str {
    ContactError::from_message_key(server_message)
        .map(ContactError::message_key)
        .unwrap_or("contact.failure")
}

#[component]
pub fn ContactSection() -> Element {
    let i18n = crate::use_i18n();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut status = use_signal(|| SubmitStatus::Idle);
    let mut generation = use_signal(|| 0u64);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status() == SubmitStatus::Submitting {
            return;
        }

        let form = ContactForm {
            name: name(),
            email: email(),
            message: message(),
        };
        if let Err(err) = form.validate() {
            status.set(SubmitStatus::Failed(err.message_key()));
            return;
        }

        status.set(SubmitStatus::Submitting);
        spawn(async move {
            match api::submit_contact(form.name, form.email, form.message).await {
                Ok(receipt) => {
                    tracing::debug!("contact: accepted at {}", receipt.received_at);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                    let ticket = generation() + 1;
                    generation.set(ticket);
                    status.set(SubmitStatus::Sent);

                    gloo_timers::future::sleep(SUCCESS_DISPLAY).await;
                    if reset_is_current(status(), ticket, generation()) {
                        status.set(SubmitStatus::Idle);
                    }
                }
                Err(err) => {
                    tracing::warn!("contact: submission failed: {err}");
                    status.set(SubmitStatus::Failed(failure_key(&err.to_string())));
                }
            }
        });
    };

    let submitting = status() == SubmitStatus::Submitting;
    let my_email = i18n.t("contact.my_email");
    let max_message = ContactForm::MAX_MESSAGE_CHARS.to_string();

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }
        section { id: "contact", class: "section",
            div { class: "section_header",
                h2 { {i18n.t("contact.title")} }
                p { class: "hint", {i18n.t("contact.description")} }
                a { class: "contact_email", href: "mailto:{my_email}", "✉️ {my_email}" }
            }

            form { class: "panel contact_form", novalidate: true, onsubmit: submit,
                label { class: "field",
                    span { {i18n.t("contact.name")} }
                    input {
                        r#type: "text",
                        name: "name",
                        autocomplete: "name",
                        value: "{name}",
                        disabled: submitting,
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { {i18n.t("contact.email")} }
                    input {
                        r#type: "email",
                        name: "email",
                        autocomplete: "email",
                        value: "{email}",
                        disabled: submitting,
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "field",
                    span { {i18n.t("contact.message")} }
                    textarea {
                        name: "message",
                        rows: "6",
                        maxlength: "{max_message}",
                        value: "{message}",
                        disabled: submitting,
                        oninput: move |evt| message.set(evt.value()),
                    }
                }

                match status() {
                    SubmitStatus::Sent => rsx! {
                        p { class: "notice success", role: "status", {i18n.t("contact.success")} }
                    },
                    SubmitStatus::Failed(key) => rsx! {
                        p { class: "notice error", role: "alert", {i18n.t(key)} }
                    },
                    SubmitStatus::Idle | SubmitStatus::Submitting => rsx! {},
                }

                button { class: "btn primary", r#type: "submit", disabled: submitting,
                    if submitting {
                        {i18n.t("contact.sending")}
                    } else {
                        {i18n.t("contact.send")}
                    }
                }
            }
        }
    }
}
