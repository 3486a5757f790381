use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

const STACK_PREVIEW: &[&str] = &["Rust", "TypeScript", "React", "PostgreSQL", "Docker"];

#[component]
pub fn Hero() -> Element {
    let i18n = crate::use_i18n();
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            div { id: "links",
                span { class: "badge", {i18n.t("hero.welcome")} }
                h1 { {i18n.t("hero.title")} }
                p { class: "subtitle", {i18n.t("hero.subtitle")} }
                p { {i18n.t("hero.description")} }

                div { class: "cta_row",
                    a { class: "btn primary", href: "#projects", {i18n.t("hero.cta_work")} }
                    a { class: "btn", href: "#contact", {i18n.t("hero.cta_contact")} }
                }
                ul { class: "stack",
                    for tech in STACK_PREVIEW.iter().copied() {
                        li { key: "{tech}", class: "stack_item", "{tech}" }
                    }
                }
            }
            a { class: "scroll_hint hint", href: "#about", "↓ " {i18n.t("hero.scroll")} }
        }
    }
}
