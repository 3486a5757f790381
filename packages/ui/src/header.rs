use api::Locale;
use dioxus::prelude::*;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// In-page anchors and the catalog key of their label.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("about", "header.about"),
    ("skills", "header.skills"),
    ("projects", "header.projects"),
    ("contact", "header.contact"),
];

#[component]
pub fn Header(on_switch_locale: EventHandler<Locale>) -> Element {
    let i18n = crate::use_i18n();
    let mut menu_open = use_signal(|| false);
    let nav_class = if menu_open() {
        "nav_links open"
    } else {
        "nav_links"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        header { class: "site_nav",
            div { class: "site_nav_inner",
                a { class: "brand", href: "#hero",
                    span { class: "brand_mark" }
                    span { class: "brand_name", {i18n.t("header.brand")} }
                }
                button {
                    class: "menu_toggle",
                    r#type: "button",
                    "aria-label": i18n.t("header.menu"),
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
                nav { class: "{nav_class}",
                    for (anchor, key) in NAV_ITEMS.iter().copied() {
                        a {
                            key: "{anchor}",
                            class: "nav_link",
                            href: "#{anchor}",
                            onclick: move |_| menu_open.set(false),
                            {i18n.t(key)}
                        }
                    }
                    a {
                        class: "btn primary",
                        href: "#contact",
                        onclick: move |_| menu_open.set(false),
                        {i18n.t("header.hire")}
                    }
                    crate::LanguageSwitcher { current: i18n.locale, on_select: on_switch_locale }
                }
            }
        }
    }
}
