use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let i18n = crate::use_i18n();
    let year = chrono::Utc::now().year().to_string();

    rsx! {
        footer { class: "site_footer",
            p { class: "hint", {i18n.format("footer.rights", &[("year", year.as_str())])} }
            a { class: "nav_link", href: "#hero", "↑ " {i18n.t("footer.backToTop")} }
        }
    }
}
