use super::{CollectionQuery, ContentRepository, FEATURED_PROJECTS, FEATURED_SKILLS};
use crate::types::{Project, Skill};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Reads featured rows through the Supabase REST gateway (`/rest/v1`).
pub struct SupabaseRepository {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseRepository {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    pub fn collection_url(&self, query: &CollectionQuery) -> String {
        format!(
            "{}/rest/v1/{}?{}",
            self.base_url,
            query.collection,
            query.to_postgrest()
        )
    }

    async fn fetch<T: DeserializeOwned>(&self, query: &CollectionQuery) -> Result<Vec<T>> {
        let url = self.collection_url(query);
        debug!("supabase.fetch: collection={}", query.collection);

        let rows = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("request to {} failed", query.collection))?
            .error_for_status()
            .with_context(|| format!("{} query rejected", query.collection))?
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("invalid {} payload", query.collection))?;

        debug!(
            "supabase.fetch: collection={} rows={}",
            query.collection,
            rows.len()
        );
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl ContentRepository for SupabaseRepository {
    async fn featured_skills(&self) -> Result<Vec<Skill>> {
        self.fetch(&FEATURED_SKILLS).await
    }

    async fn featured_projects(&self) -> Result<Vec<Project>> {
        self.fetch(&FEATURED_PROJECTS).await
    }
}
