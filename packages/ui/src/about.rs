use dioxus::prelude::*;

const ABOUT_CSS: Asset = asset!("/assets/styling/about.css");

/// Icon and catalog id (`about.traits.<id>.label` / `.description`).
const TRAITS: &[(&str, &str)] = &[
    ("🧩", "problem_solving"),
    ("🏗️", "system_design"),
    ("🔌", "api"),
    ("📊", "data"),
    ("🧪", "testing"),
    ("🚀", "delivery"),
];

#[component]
pub fn About() -> Element {
    let i18n = crate::use_i18n();
    rsx! {
        document::Link { rel: "stylesheet", href: ABOUT_CSS }
        section { id: "about", class: "section",
            div { class: "section_header",
                span { class: "badge", {i18n.t("about.badge")} }
                h2 { {i18n.t("about.title")} }
                p { class: "hint", {i18n.t("about.description")} }
            }
            div { class: "trait_grid",
                for (icon, id) in TRAITS.iter().copied() {
                    div { key: "{id}", class: "card trait",
                        span { class: "trait_icon", "{icon}" }
                        h3 { {i18n.t(&format!("about.traits.{id}.label"))} }
                        p { class: "summary", {i18n.t(&format!("about.traits.{id}.description"))} }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Locale;

    #[test]
    fn every_trait_is_translated() {
        for locale in Locale::ALL {
            let catalog = crate::i18n::load_catalog(locale);
            for (_, id) in TRAITS {
                assert!(catalog.contains(&format!("about.traits.{id}.label")));
                assert!(catalog.contains(&format!("about.traits.{id}.description")));
            }
        }
    }
}
