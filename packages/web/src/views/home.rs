use crate::Route;
use api::Locale;
use dioxus::prelude::*;

#[component]
pub fn Home(locale: Locale) -> Element {
    let nav = navigator();

    rsx! {
        // Keyed so a locale switch remounts the provider with the new catalog.
        ui::I18nProvider { key: "{locale}", locale,
            ui::Header {
                on_switch_locale: move |next: Locale| {
                    nav.push(Route::Home { locale: next });
                },
            }
            main {
                ui::Hero {}
                ui::About {}
                ui::SkillsSection {}
                ui::ProjectsSection {}
                ui::ContactSection {}
            }
            ui::Footer {}
        }
    }
}
