use crate::config::{AppConfig, AppMode, ContentSourceConfig};
use crate::repository::{ContentRepository, SqliteRepository, SupabaseRepository};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Global application state shared by every server function.
pub struct AppState {
    pub content: Arc<dyn ContentRepository>,
    pub config: AppConfig,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create AppState from configuration
    ///
    /// Local mode opens (and seeds) the SQLite database; production mode
    /// talks to the Supabase REST gateway.
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }

        let content: Arc<dyn ContentRepository> = match &config.content {
            ContentSourceConfig::Supabase { url, anon_key } => {
                tracing::info!("   Content: Supabase ({})", url);
                Arc::new(SupabaseRepository::new(url, anon_key))
            }
            ContentSourceConfig::SQLite { path } => {
                tracing::info!("   Content: SQLite ({})", path);
                let sqlite = SqliteRepository::connect(path).await?;
                sqlite.run_migrations().await?;
                tracing::info!("✓ SQLite connected and migrations applied");
                if sqlite.seed_if_empty().await? {
                    tracing::info!("✓ Demo content seeded");
                }
                Arc::new(sqlite)
            }
        };

        Ok(Self { content, config })
    }

    /// Build a state around an existing repository.
    pub fn with_repository(config: AppConfig, content: Arc<dyn ContentRepository>) -> Self {
        Self { content, config }
    }

    /// Get the global AppState, initializing it from the environment on first use.
    pub async fn global() -> Result<Arc<Self>> {
        if let Some(test_state) = TEST_STATE.with(|s| s.borrow().clone()) {
            return Ok(test_state);
        }

        STATE
            .get_or_try_init(|| async {
                let config = AppConfig::from_env()?;
                Ok::<_, anyhow::Error>(Arc::new(Self::from_config(config).await?))
            })
            .await
            .cloned()
    }
}

/// Global state storage, initialized once per process
pub(crate) static STATE: OnceCell<Arc<AppState>> = OnceCell::const_new();

thread_local! {
    /// Thread-local state override for testing
    pub(crate) static TEST_STATE: std::cell::RefCell<Option<Arc<AppState>>> = const { std::cell::RefCell::new(None) };
}
