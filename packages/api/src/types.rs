use crate::locale::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub category_fr: String,
    pub category_en: String,
    /// 0-100.
    #[serde(deserialize_with = "proficiency_from_any")]
    pub proficiency: u8,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description_fr: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Skill {
    pub fn category(&self, locale: Locale) -> &str {
        match locale {
            Locale::Fr => &self.category_fr,
            Locale::En => &self.category_en,
        }
    }

    pub fn description(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::Fr => self.description_fr.as_deref(),
            Locale::En => self.description_en.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title_fr: String,
    pub title_en: String,
    pub description_fr: String,
    pub description_en: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "stack_or_empty")]
    pub stack: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::Fr => &self.title_fr,
            Locale::En => &self.title_en,
        }
    }

    pub fn description(&self, locale: Locale) -> &str {
        match locale {
            Locale::Fr => &self.description_fr,
            Locale::En => &self.description_en,
        }
    }

    /// Category with blank values treated as absent.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// Datastores hand back integers or floats depending on the column type.
pub(crate) fn clamp_proficiency(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

fn proficiency_from_any<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(clamp_proficiency(value))
}

fn stack_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Visitor input from the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("email address is invalid")]
    InvalidEmail,
    #[error("message is required")]
    MissingMessage,
    #[error("message is too long")]
    MessageTooLong,
}

impl ContactError {
    /// Catalog key of the localized message for this error.
    pub fn message_key(self) -> &'static str {
        match self {
            ContactError::MissingName => "contact.errors.name",
            ContactError::InvalidEmail => "contact.errors.email",
            ContactError::MissingMessage => "contact.errors.message",
            ContactError::MessageTooLong => "contact.errors.too_long",
        }
    }

    /// Reverse of [`ContactError::message_key`], for errors that crossed the wire as text.
    pub fn from_message_key(key: &str) -> Option<Self> {
        [
            ContactError::MissingName,
            ContactError::InvalidEmail,
            ContactError::MissingMessage,
            ContactError::MessageTooLong,
        ]
        .into_iter()
        .find(|err| key.contains(err.message_key()))
    }
}

impl ContactForm {
    pub const MAX_MESSAGE_CHARS: usize = 5000;

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        if self.message.chars().count() > Self::MAX_MESSAGE_CHARS {
            return Err(ContactError::MessageTooLong);
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !value.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub received_at: String,
}
