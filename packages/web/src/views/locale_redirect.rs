use crate::Route;
use api::Locale;
use dioxus::prelude::*;

/// `/` has no content of its own: send the visitor to their preferred locale.
#[component]
pub fn LocaleRedirect() -> Element {
    let nav = navigator();
    let fallback = format!("/{}", Locale::DEFAULT);

    use_effect(move || {
        spawn(async move {
            let locale = ui::preferred_locale().await;
            nav.replace(Route::Home { locale });
        });
    });

    rsx! {
        div { class: "redirecting",
            a { href: "{fallback}", "…" }
        }
    }
}
