use dioxus::prelude::*;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    // `/fr/missing` gets a French page; unknown locales get the default one.
    let locale = api::resolve_segments(segments.as_slice()).render_locale();

    // Server renders answer 404 so crawlers don't index the page.
    #[cfg(feature = "server")]
    dioxus::fullstack::FullstackContext::commit_http_status(
        dioxus::fullstack::http::StatusCode::NOT_FOUND,
        None,
    );

    rsx! {
        ui::I18nProvider { key: "{locale}", locale,
            main {
                ui::NotFound {}
            }
        }
    }
}
