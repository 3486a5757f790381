use crate::config::{AppConfig, AppMode, ContentSourceConfig};
use crate::repository::{ContentRepository, SqliteRepository, StaticContent};
use crate::state::AppState;
use crate::types::{Project, Skill};
use sqlx::{Any, Pool};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

/// A per-test SQLite database wired into a thread-local [`AppState`].
pub struct TestContext {
    pub pool: Pool<Any>,
    pub state: Arc<AppState>,
    db_path: PathBuf,
}

impl TestContext {
    /// Fresh, migrated, *unseeded* database.
    pub async fn new() -> Self {
        let db_path = std::env::temp_dir().join(format!("folio-test-{}.db", Uuid::new_v4()));

        let repo = SqliteRepository::connect(&db_path.to_string_lossy())
            .await
            .expect("Failed to create test database");
        repo.run_migrations()
            .await
            .expect("Failed to run migrations");

        let pool = repo.pool().clone();
        let config = AppConfig {
            mode: AppMode::Local,
            content: ContentSourceConfig::SQLite {
                path: db_path.to_string_lossy().to_string(),
            },
        };
        let state = Arc::new(AppState::with_repository(config, Arc::new(repo)));

        Self {
            pool,
            state,
            db_path,
        }
    }

    /// Same as [`TestContext::new`] with the demo rows loaded.
    pub async fn seeded() -> Self {
        let ctx = Self::new().await;
        crate::repository::seed::seed_content(&ctx.pool)
            .await
            .expect("Failed to seed test database");
        ctx
    }

    pub fn set_global(&self) {
        // Each test thread sees its own state; nothing touches the process-wide cell.
        install(self.state.clone());
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        clear();
        let _ = std::fs::remove_file(&self.db_path);
    }
}

/// Serve fixed records instead of a database.
pub fn install_static(skills: Vec<Skill>, projects: Vec<Project>) {
    install_repository(Arc::new(StaticContent { skills, projects }));
}

/// Serve from any repository, e.g. one that always fails.
pub fn install_repository(repo: Arc<dyn ContentRepository>) {
    let config = AppConfig {
        mode: AppMode::Local,
        content: ContentSourceConfig::SQLite {
            path: ":memory:".to_string(),
        },
    };
    install(Arc::new(AppState::with_repository(config, repo)));
}

pub fn clear() {
    crate::state::TEST_STATE.with(|s| {
        *s.borrow_mut() = None;
    });
}

fn install(state: Arc<AppState>) {
    crate::state::TEST_STATE.with(|s| {
        *s.borrow_mut() = Some(state);
    });
}

