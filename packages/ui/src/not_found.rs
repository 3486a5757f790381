use dioxus::prelude::*;

/// Shown for any path whose locale segment is unsupported or that matches no page.
#[component]
pub fn NotFound() -> Element {
    let i18n = crate::use_i18n();
    let home = format!("/{}", i18n.locale.code());

    rsx! {
        section { class: "section not_found",
            div { class: "panel",
                h1 { "404" }
                h2 { {i18n.t("notfound.title")} }
                p { class: "hint", {i18n.t("notfound.body")} }
                a { class: "btn primary", href: "{home}", {i18n.t("notfound.home")} }
            }
        }
    }
}
