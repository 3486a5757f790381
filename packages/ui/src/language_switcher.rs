use api::Locale;
use dioxus::prelude::*;

fn option_class(active: bool) -> &'static str {
    if active {
        "lang_option active"
    } else {
        "lang_option"
    }
}

fn locale_name_key(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "lang.en",
        Locale::Fr => "lang.fr",
    }
}

/// Flag dropdown. Picking a different locale persists it and hands it to `on_select`,
/// which is expected to navigate to that locale's route.
#[component]
pub fn LanguageSwitcher(current: Locale, on_select: EventHandler<Locale>) -> Element {
    let i18n = crate::use_i18n();
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "lang_switcher",
            button {
                class: "lang_toggle",
                r#type: "button",
                title: i18n.t("lang.switch"),
                "aria-haspopup": "true",
                "aria-expanded": "{open}",
                onclick: move |_| open.set(!open()),
                span { class: "flag", "{current.flag()}" }
                span { class: "code", "{current.label()}" }
            }

            if open() {
                // Click-away layer.
                div { class: "lang_backdrop", onclick: move |_| open.set(false) }
                ul { class: "lang_menu", role: "menu",
                    for locale in Locale::ALL {
                        li { key: "{locale}",
                            button {
                                class: option_class(locale == current),
                                r#type: "button",
                                role: "menuitem",
                                onclick: move |_| {
                                    open.set(false);
                                    if locale != current {
                                        crate::i18n::remember_locale(locale);
                                        on_select.call(locale);
                                    }
                                },
                                span { class: "flag", "{locale.flag()}" }
                                span { {i18n.t(locale_name_key(locale))} }
                            }
                        }
                    }
                }
            }
        }
    }
}
