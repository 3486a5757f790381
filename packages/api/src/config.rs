#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Where featured skills and projects are read from.
#[derive(Clone, PartialEq, Eq)]
pub enum ContentSourceConfig {
    /// Hosted Postgres exposed through the Supabase REST gateway.
    Supabase { url: String, anon_key: String },
    /// Seeded local database for development.
    SQLite { path: String },
}

impl std::fmt::Debug for ContentSourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSourceConfig::Supabase { url, .. } => f
                .debug_struct("Supabase")
                .field("url", url)
                .field("anon_key", &"***")
                .finish(),
            ContentSourceConfig::SQLite { path } => {
                f.debug_struct("SQLite").field("path", path).finish()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub content: ContentSourceConfig,
}

pub const DEFAULT_SQLITE_PATH: &str = ".dev/local.db";

#[cfg(feature = "server")]
impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;

        let _ = dotenvy::dotenv();
        let mode = AppMode::from_env();
        let content = match mode {
            AppMode::Local => ContentSourceConfig::SQLite {
                path: std::env::var("SQLITE_PATH")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string()),
            },
            AppMode::Production => ContentSourceConfig::Supabase {
                url: std::env::var("SUPABASE_URL")
                    .context("SUPABASE_URL must be set in production mode")?,
                anon_key: std::env::var("SUPABASE_ANON_KEY")
                    .context("SUPABASE_ANON_KEY must be set in production mode")?,
            },
        };

        Ok(Self { mode, content })
    }
}
