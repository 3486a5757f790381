use api::Locale;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

const EN_JSON: &str = include_str!("../messages/en.json");
const FR_JSON: &str = include_str!("../messages/fr.json");

/// Keys the page components look up. Every shipped catalog must define all of them.
pub const REQUIRED_KEYS: &[&str] = &[
    "meta.title",
    "meta.description",
    "header.brand",
    "header.about",
    "header.skills",
    "header.projects",
    "header.contact",
    "header.hire",
    "header.menu",
    "lang.switch",
    "lang.en",
    "lang.fr",
    "hero.welcome",
    "hero.title",
    "hero.subtitle",
    "hero.description",
    "hero.cta_work",
    "hero.cta_contact",
    "hero.scroll",
    "about.badge",
    "about.title",
    "about.description",
    "skills.title",
    "skills.subtitle",
    "skills.loading",
    "skills.empty",
    "skills.count",
    "skills.count_one",
    "skills.level.expert",
    "skills.level.advanced",
    "skills.level.intermediate",
    "skills.level.beginner",
    "skills.stats.technologies",
    "skills.stats.average",
    "skills.stats.categories",
    "skills.stats.experts",
    "projects.title",
    "projects.subtitle",
    "projects.loading",
    "projects.empty",
    "projects.all",
    "projects.code",
    "projects.live",
    "contact.title",
    "contact.description",
    "contact.name",
    "contact.email",
    "contact.message",
    "contact.send",
    "contact.sending",
    "contact.success",
    "contact.failure",
    "contact.my_email",
    "contact.errors.name",
    "contact.errors.email",
    "contact.errors.message",
    "contact.errors.too_long",
    "footer.rights",
    "footer.backToTop",
    "notfound.title",
    "notfound.body",
    "notfound.home",
];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("catalog root must be an object")]
    NotAnObject,
    #[error("unsupported value at `{0}` (only objects, strings, numbers and booleans)")]
    UnsupportedValue(String),
}

/// Immutable translation table keyed by dotted path (`"header.about"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// Parse a nested JSON document, flattening objects into dotted keys.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let root: Value = serde_json::from_str(source)?;
        let Value::Object(entries) = root else {
            return Err(CatalogError::NotAnObject);
        };

        let mut messages = BTreeMap::new();
        for (key, value) in entries {
            flatten_into(&mut messages, key, value)?;
        }
        Ok(Self { messages })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Localized string for `key`, or the key itself when missing.
    pub fn t(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }

    /// Like [`MessageCatalog::t`], replacing `{name}` placeholders.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten_into(
    out: &mut BTreeMap<String, String>,
    prefix: String,
    value: Value,
) -> Result<(), CatalogError> {
    match value {
        Value::String(text) => {
            out.insert(prefix, text);
        }
        Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        Value::Object(entries) => {
            for (key, nested) in entries {
                flatten_into(out, format!("{prefix}.{key}"), nested)?;
            }
        }
        Value::Array(_) | Value::Null => return Err(CatalogError::UnsupportedValue(prefix)),
    }
    Ok(())
}

fn source(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_JSON,
        Locale::Fr => FR_JSON,
    }
}

fn parsed(locale: Locale) -> Option<&'static MessageCatalog> {
    static EN: OnceLock<Option<MessageCatalog>> = OnceLock::new();
    static FR: OnceLock<Option<MessageCatalog>> = OnceLock::new();

    let cell = match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
    };
    cell.get_or_init(|| match MessageCatalog::from_json(source(locale)) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            tracing::warn!("i18n: {} catalog failed to load: {err}", locale.code());
            None
        }
    })
    .as_ref()
}

static EMPTY: MessageCatalog = MessageCatalog {
    messages: BTreeMap::new(),
};

/// Catalog for `locale`, parsed once per process.
///
/// A catalog that fails to load is replaced wholesale by the default
/// locale's catalog; entries are never merged.
pub fn load_catalog(locale: Locale) -> &'static MessageCatalog {
    choose(parsed(locale), || parsed(Locale::DEFAULT))
}

/// Catalog for a raw locale code such as a path segment; anything we don't
/// ship falls back to the default locale's catalog.
pub fn load_catalog_for_code(code: &str) -> &'static MessageCatalog {
    load_catalog(code.parse().unwrap_or(Locale::DEFAULT))
}

fn choose<'a>(
    primary: Option<&'a MessageCatalog>,
    fallback: impl FnOnce() -> Option<&'a MessageCatalog>,
) -> &'a MessageCatalog {
    primary.or_else(fallback).unwrap_or(&EMPTY)
}

/// Active locale plus its catalog, provided to the component tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct I18n {
    pub locale: Locale,
    catalog: &'static MessageCatalog,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            catalog: load_catalog(locale),
        }
    }

    pub fn t(&self, key: &str) -> String {
        self.catalog.t(key)
    }

    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.catalog.format(key, args)
    }
}

/// Provide [`I18n`] for `locale` to everything below.
///
/// Give the provider a `key` derived from the locale so a locale change
/// remounts the subtree with the new catalog.
#[component]
pub fn I18nProvider(locale: Locale, children: Element) -> Element {
    let i18n = use_context_provider(|| I18n::new(locale));

    // Keep <html lang> in sync for screen readers and search engines.
    use_effect(move || {
        let code = i18n.locale.code();
        spawn(async move {
            let _ = document::eval(&format!(
                r#"(function(){{ try {{ document.documentElement.lang = "{code}"; }} catch(e) {{}} return ""; }})()"#
            ))
            .await;
        });
    });

    let title = i18n.t("meta.title");
    let description = i18n.t("meta.description");

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        {children}
    }
}

pub fn use_i18n() -> I18n {
    if let Some(i18n) = try_use_context::<I18n>() {
        return i18n;
    }

    // Fallback for mis-ordered providers to avoid panics in production.
    tracing::warn!("i18n: missing I18nProvider context, using default locale");
    I18n::new(Locale::DEFAULT)
}

/// localStorage key holding the visitor's last explicit language choice.
pub const LOCALE_STORAGE_KEY: &str = "folio_locale";

/// Persist `locale` as the visitor's preference. Best-effort.
pub fn remember_locale(locale: Locale) {
    spawn(async move {
        let _ = document::eval(&format!(
            r#"(function(){{ try {{ localStorage.setItem("{LOCALE_STORAGE_KEY}","{}"); }} catch(e) {{}} return ""; }})()"#,
            locale.code()
        ))
        .await;
    });
}

/// Saved preference, then the browser language, then [`Locale::DEFAULT`].
pub async fn preferred_locale() -> Locale {
    let js = format!(
        r#"
        (function(){{
          try {{
            const saved = localStorage.getItem("{LOCALE_STORAGE_KEY}");
            if(saved && typeof saved === "string" && saved.length > 0) return saved;
          }} catch(e) {{}}
          try {{ return (navigator.language || ""); }} catch(e) {{}}
          return "";
        }})()
        "#
    );
    match document::eval(&js).await {
        Ok(value) => value
            .as_str()
            .and_then(Locale::negotiate)
            .unwrap_or(Locale::DEFAULT),
        Err(err) => {
            tracing::debug!("i18n: could not read browser language: {err:?}");
            Locale::DEFAULT
        }
    }
}
