use api::Locale;
use dioxus::prelude::*;

use views::{Home, LocaleRedirect, PageNotFound};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    LocaleRedirect {},
    // Only supported codes parse, anything else falls through to the catch-all.
    #[route("/:locale")]
    Home { locale: Locale },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    init_tracing();

    #[cfg(feature = "server")]
    log_runtime_config();

    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // dioxus installs its own logger when launching; whichever runs first wins.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(feature = "server")]
fn log_runtime_config() {
    use dioxus::logger::tracing;
    use std::env;

    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    tracing::info!("startup: IP={ip} PORT={port}");

    // The content source is built lazily on the first request; surface a bad
    // configuration now rather than as empty sections later.
    match api::config::AppConfig::from_env() {
        Ok(config) => {
            tracing::info!("startup: mode={:?} content={:?}", config.mode, config.content);
            if let api::config::ContentSourceConfig::Supabase { url, .. } = &config.content {
                if url.contains("127.0.0.1") || url.contains("localhost") {
                    tracing::warn!("startup: SUPABASE_URL points to localhost");
                }
            }
        }
        Err(err) => tracing::warn!("startup: configuration incomplete: {err:#}"),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::FolioTheme {}
        Router::<Route> {}
    }
}
