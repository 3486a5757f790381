use super::{seed, CollectionQuery, ContentRepository, FEATURED_PROJECTS, FEATURED_SKILLS};
use crate::types::{clamp_proficiency, Project, Skill};
use anyhow::{Context, Result};
use sqlx::{any::AnyRow, Any, Pool, Row};
use std::path::Path;

/// Local development backend: a seeded SQLite file behind an `Any` pool.
pub struct SqliteRepository {
    pool: Pool<Any>,
}

impl SqliteRepository {
    pub async fn connect(path: &str) -> Result<Self> {
        // Required for sqlx::Any pools; without this, AnyPoolOptions panics at runtime.
        sqlx::any::install_default_drivers();

        if let Some(parent) = Path::new(path).parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create database directory")?;
        }

        let url = format!("sqlite:{}?mode=rwc", path);
        let pool = sqlx::any::AnyPoolOptions::new()
            .max_connections(1) // SQLite doesn't handle concurrent writes well
            .connect(&url)
            .await
            .context("Failed to connect to SQLite")?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &Pool<Any> {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("Failed to run migrations")?;
        Ok(())
    }

    pub async fn seed_if_empty(&self) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills")
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0);

        if count > 0 {
            return Ok(false);
        }

        tracing::info!("Content tables are empty, seeding demo content...");
        seed::seed_content(&self.pool).await?;
        Ok(true)
    }

    async fn fetch_rows(&self, query: &CollectionQuery) -> Result<Vec<AnyRow>> {
        sqlx::query(&query.to_sql())
            .fetch_all(&self.pool)
            .await
            .with_context(|| format!("Failed to query {}", query.collection))
    }
}

fn skill_from_row(row: &AnyRow) -> Result<Skill> {
    Ok(Skill {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        category_fr: row.try_get("category_fr")?,
        category_en: row.try_get("category_en")?,
        proficiency: clamp_proficiency(row.try_get::<i64, _>("proficiency")? as f64),
        icon: row.try_get("icon")?,
        description_fr: row.try_get("description_fr")?,
        description_en: row.try_get("description_en")?,
        featured: row.try_get::<i64, _>("featured")? != 0,
    })
}

fn project_from_row(row: &AnyRow) -> Result<Project> {
    let stack: String = row.try_get("stack")?;
    Ok(Project {
        id: row.try_get("id")?,
        title_fr: row.try_get("title_fr")?,
        title_en: row.try_get("title_en")?,
        description_fr: row.try_get("description_fr")?,
        description_en: row.try_get("description_en")?,
        image_url: row.try_get("image_url")?,
        stack: serde_json::from_str(&stack).context("project stack is not a JSON array")?,
        github_url: row.try_get("github_url")?,
        live_url: row.try_get("live_url")?,
        category: row.try_get("category")?,
        featured: row.try_get::<i64, _>("featured")? != 0,
    })
}

#[async_trait::async_trait]
impl ContentRepository for SqliteRepository {
    async fn featured_skills(&self) -> Result<Vec<Skill>> {
        self.fetch_rows(&FEATURED_SKILLS)
            .await?
            .iter()
            .map(skill_from_row)
            .collect()
    }

    async fn featured_projects(&self) -> Result<Vec<Project>> {
        self.fetch_rows(&FEATURED_PROJECTS)
            .await?
            .iter()
            .map(project_from_row)
            .collect()
    }
}
