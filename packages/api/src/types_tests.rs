#![cfg(test)]

use crate::locale::Locale;
use crate::types::{ContactError, ContactForm, Project, Skill};

fn skill_json() -> &'static str {
    r#"{
        "id": 4,
        "name": "Rust",
        "category_fr": "Langages",
        "category_en": "Languages",
        "proficiency": 87.6,
        "icon": null,
        "description_fr": "Systèmes",
        "description_en": "Systems",
        "featured": true
    }"#
}

#[test]
fn skill_fields_follow_locale() {
    let skill: Skill = serde_json::from_str(skill_json()).expect("skill json");
    assert_eq!(skill.proficiency, 88);
    assert_eq!(skill.category(Locale::Fr), "Langages");
    assert_eq!(skill.category(Locale::En), "Languages");
    assert_eq!(skill.description(Locale::Fr), Some("Systèmes"));
    assert_eq!(skill.icon, None);
}

#[test]
fn proficiency_is_clamped() {
    let raw = skill_json().replace("87.6", "140");
    let skill: Skill = serde_json::from_str(&raw).expect("skill json");
    assert_eq!(skill.proficiency, 100);

    let raw = skill_json().replace("87.6", "-3");
    let skill: Skill = serde_json::from_str(&raw).expect("skill json");
    assert_eq!(skill.proficiency, 0);
}

#[test]
fn project_tolerates_missing_optionals() {
    let project: Project = serde_json::from_str(
        r#"{
            "id": 9,
            "title_fr": "Boutique",
            "title_en": "Shop",
            "description_fr": "Une boutique",
            "description_en": "A shop",
            "stack": null,
            "category": "  "
        }"#,
    )
    .expect("project json");
    assert!(project.stack.is_empty());
    assert_eq!(project.category(), None);
    assert_eq!(project.title(Locale::Fr), "Boutique");
    assert_eq!(project.description(Locale::En), "A shop");
    assert!(!project.featured);
}

fn form(name: &str, email: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn contact_form_validation() {
    assert_eq!(form("Ada", "ada@example.com", "Hello").validate(), Ok(()));
    assert_eq!(
        form(" ", "ada@example.com", "Hello").validate(),
        Err(ContactError::MissingName)
    );
    for email in ["", "ada", "ada@", "@example.com", "ada@example", "a b@example.com", "a@b@c.d"] {
        assert_eq!(
            form("Ada", email, "Hello").validate(),
            Err(ContactError::InvalidEmail),
            "{email}"
        );
    }
    assert_eq!(
        form("Ada", "ada@example.com", "\n").validate(),
        Err(ContactError::MissingMessage)
    );
    let long = "x".repeat(ContactForm::MAX_MESSAGE_CHARS + 1);
    assert_eq!(
        form("Ada", "ada@example.com", &long).validate(),
        Err(ContactError::MessageTooLong)
    );
}

#[test]
fn contact_error_keys_round_trip_through_text() {
    let wire = format!("error running server function: {}", ContactError::InvalidEmail.message_key());
    assert_eq!(
        ContactError::from_message_key(&wire),
        Some(ContactError::InvalidEmail)
    );
    assert_eq!(ContactError::from_message_key("boom"), None);
}
