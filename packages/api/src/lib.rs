//! This crate contains all shared fullstack server functions and the types
//! they exchange with the UI.
use dioxus::prelude::*;

pub mod config;
pub mod locale;
pub mod repository;
pub mod types;

#[cfg(feature = "server")]
pub mod state;

mod contact;
mod content;

#[cfg(test)]
mod types_tests;

#[cfg(feature = "server")]
pub mod test_utils;

/// Health check endpoint
#[get("/api/health")]
pub async fn health_check() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("health_check");
    Ok("OK".to_string())
}

pub use contact::submit_contact;
pub use content::{featured_projects, featured_skills};
pub use locale::{resolve_path, resolve_segments, Locale, LocaleResolution};
