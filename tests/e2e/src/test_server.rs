use anyhow::{Context, Result};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use uuid::Uuid;

const STARTUP_TIMEOUT: Duration = Duration::from_secs(60);

/// The `web` binary in local mode, serving demo content from its own
/// throwaway SQLite file.
pub struct TestServer {
    base_url: String,
    child: Child,
    db_path: PathBuf,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let port = free_port()?;
        let db_path = std::env::temp_dir().join(format!("folio-e2e-{}.db", Uuid::new_v4()));
        let workspace = workspace_root();
        ensure_public_dir(&target_dir(&workspace))?;
        let child = spawn_web(port, &db_path, &workspace)?;

        // Constructed before waiting so a server that never comes up is still killed.
        let server = Self {
            base_url: format!("http://localhost:{port}"),
            child,
            db_path,
        };
        server.wait_until_healthy().await?;
        Ok(server)
    }

    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a site path such as `/fr`.
    pub fn page(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn wait_until_healthy(&self) -> Result<()> {
        let health = self.page("/api/health");
        let started = Instant::now();
        let mut last_report = started;

        while started.elapsed() < STARTUP_TIMEOUT {
            if let Ok(response) = reqwest::get(&health).await {
                if response.status().is_success() {
                    return Ok(());
                }
            }
            if last_report.elapsed() >= Duration::from_secs(5) {
                eprintln!(
                    "waiting for web server ({}s, includes compilation)",
                    started.elapsed().as_secs()
                );
                last_report = Instant::now();
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("web server not healthy after {STARTUP_TIMEOUT:?}")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.db_path);
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn target_dir(workspace: &Path) -> PathBuf {
    std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace.join("target"))
}

/// A plain `cargo run` build (no `dx`) has no bundled assets, and the
/// fullstack server refuses to start without a `public` directory next to
/// the binary. An empty one is enough for SSR and the API.
pub fn ensure_public_dir(target_dir: &Path) -> Result<PathBuf> {
    let public = target_dir.join("debug").join("public");
    std::fs::create_dir_all(&public)
        .with_context(|| format!("failed to create {}", public.display()))?;
    Ok(public)
}

fn spawn_web(port: u16, db_path: &Path, workspace: &Path) -> Result<Child> {
    Command::new("cargo")
        .args(["run", "--package", "web", "--features", "server"])
        .current_dir(workspace)
        .env("APP_MODE", "local")
        .env("SQLITE_PATH", db_path)
        .env("IP", "127.0.0.1")
        .env("PORT", port.to_string())
        .env_remove("SUPABASE_URL")
        .env_remove("SUPABASE_ANON_KEY")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("failed to spawn `cargo run -p web`")
}

fn free_port() -> Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    Ok(listener.local_addr()?.port())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_dir_is_created_under_the_debug_profile() {
        let target = std::env::temp_dir().join(format!("folio-target-{}", Uuid::new_v4()));
        let public = ensure_public_dir(&target).expect("create public dir");
        assert_eq!(public, target.join("debug").join("public"));
        assert!(public.is_dir());

        // Running again over an existing directory is fine.
        ensure_public_dir(&target).expect("create public dir twice");
        let _ = std::fs::remove_dir_all(&target);
    }
}
