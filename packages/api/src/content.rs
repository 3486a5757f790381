use crate::types::{Project, Skill};
use dioxus::prelude::*;

/// Featured skills, highest proficiency first.
///
/// A failing datastore is reported as an empty list; the page renders
/// "no items" rather than an error.
#[dioxus::prelude::get("/api/skills/featured")]
pub async fn featured_skills() -> Result<Vec<Skill>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("featured_skills is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("featured_skills");
        let state = crate::state::AppState::global()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        Ok(or_empty("skills", state.content.featured_skills().await))
    }
}

/// Featured projects, newest first.
#[dioxus::prelude::get("/api/projects/featured")]
pub async fn featured_projects() -> Result<Vec<Project>, ServerFnError> {
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::new("featured_projects is server-only"))
    }

    #[cfg(feature = "server")]
    {
        tracing::debug!("featured_projects");
        let state = crate::state::AppState::global()
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;
        Ok(or_empty("projects", state.content.featured_projects().await))
    }
}

#[cfg(feature = "server")]
fn or_empty<T>(collection: &str, result: anyhow::Result<Vec<T>>) -> Vec<T> {
    match result {
        Ok(rows) => {
            tracing::debug!("{collection}: {} featured rows", rows.len());
            rows
        }
        Err(err) => {
            tracing::warn!("{collection}: fetch failed, rendering none: {err:#}");
            Vec::new()
        }
    }
}
