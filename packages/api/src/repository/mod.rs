//! Read-only access to the featured content shown on the site.
//!
//! The renderer only ever sees [`ContentRepository`]; the concrete backend is
//! picked from configuration at startup. Each call is a single best-effort
//! query with no retry or caching.

use crate::types::{Project, Skill};

#[cfg(feature = "server")]
pub mod seed;
#[cfg(feature = "server")]
pub mod sqlite;
#[cfg(feature = "server")]
pub mod supabase;

#[cfg(feature = "server")]
pub use sqlite::SqliteRepository;
#[cfg(feature = "server")]
pub use supabase::SupabaseRepository;

/// "Featured rows of a collection, ordered by one column."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionQuery {
    pub collection: &'static str,
    pub order_by: &'static str,
    pub descending: bool,
}

pub const FEATURED_SKILLS: CollectionQuery = CollectionQuery {
    collection: "skills",
    order_by: "proficiency",
    descending: true,
};

pub const FEATURED_PROJECTS: CollectionQuery = CollectionQuery {
    collection: "projects",
    order_by: "id",
    descending: true,
};

impl CollectionQuery {
    pub fn to_sql(&self) -> String {
        format!(
            "SELECT * FROM {} WHERE featured = true ORDER BY {} {}",
            self.collection,
            self.order_by,
            if self.descending { "DESC" } else { "ASC" }
        )
    }

    /// Query string understood by a PostgREST gateway.
    pub fn to_postgrest(&self) -> String {
        format!(
            "select=*&featured=eq.true&order={}.{}",
            self.order_by,
            if self.descending { "desc" } else { "asc" }
        )
    }
}

#[cfg(feature = "server")]
#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    async fn featured_skills(&self) -> anyhow::Result<Vec<Skill>>;

    async fn featured_projects(&self) -> anyhow::Result<Vec<Project>>;
}

/// Fixed records served from memory. Used by tests and previews.
#[derive(Debug, Clone, Default)]
pub struct StaticContent {
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

#[cfg(feature = "server")]
#[async_trait::async_trait]
impl ContentRepository for StaticContent {
    async fn featured_skills(&self) -> anyhow::Result<Vec<Skill>> {
        let mut skills: Vec<Skill> = self.skills.iter().filter(|s| s.featured).cloned().collect();
        skills.sort_by(|a, b| b.proficiency.cmp(&a.proficiency));
        Ok(skills)
    }

    async fn featured_projects(&self) -> anyhow::Result<Vec<Project>> {
        let mut projects: Vec<Project> =
            self.projects.iter().filter(|p| p.featured).cloned().collect();
        projects.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(projects)
    }
}
