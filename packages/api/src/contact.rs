use crate::types::{ContactForm, ContactReceipt};
use dioxus::prelude::*;

/// Accept a contact form submission.
///
/// Input is validated and the submission is logged; nothing is delivered to
/// a mail provider. Validation failures carry the catalog key of the
/// localized message (see [`crate::types::ContactError::message_key`]).
#[dioxus::prelude::post("/api/contact")]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<ContactReceipt, ServerFnError> {
    let form = ContactForm {
        name,
        email,
        message,
    };

    #[cfg(not(feature = "server"))]
    {
        let _ = form;
        Err(ServerFnError::new("submit_contact is server-only"))
    }

    #[cfg(feature = "server")]
    {
        if let Err(err) = form.validate() {
            tracing::debug!("submit_contact: rejected ({err})");
            return Err(ServerFnError::new(err.message_key()));
        }

        tracing::info!(
            "submit_contact: from={} message_len={}",
            email_domain(&form.email),
            form.message.chars().count()
        );

        Ok(ContactReceipt {
            received_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

#[cfg(feature = "server")]
fn email_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("invalid")
}
