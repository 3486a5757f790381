use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported site locales. Every public path starts with one of these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0:?}")]
pub struct UnknownLocale(pub String);

impl Locale {
    pub const DEFAULT: Locale = Locale::En;
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Short label shown in the language switcher.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Fr => "FR",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Fr => "🇫🇷",
        }
    }

    /// The other locale, for two-way switching.
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }

    /// Map a browser language tag (`fr-CA`, `en_US`, `EN`) onto a supported locale.
    ///
    /// Only the primary subtag is considered. Returns `None` for anything we
    /// don't ship a catalog for.
    pub fn negotiate(tag: &str) -> Option<Locale> {
        let primary = tag
            .trim()
            .split(['-', '_', ',', ';'])
            .next()
            .unwrap_or_default();
        primary.to_ascii_lowercase().parse().ok()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Outcome of resolving a request path against the locale allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleResolution {
    /// The leading segment names a supported locale.
    Active(Locale),
    /// No locale segment at all: send the visitor to a localized root.
    Redirect(Locale),
    /// The leading segment is not a supported locale.
    NotFound,
}

impl LocaleResolution {
    /// Locale to render with; not-found pages use the default catalog.
    pub fn render_locale(self) -> Locale {
        match self {
            LocaleResolution::Active(locale) | LocaleResolution::Redirect(locale) => locale,
            LocaleResolution::NotFound => Locale::DEFAULT,
        }
    }
}

/// Resolve the active locale from a request path such as `/fr/projects`.
pub fn resolve_path(path: &str) -> LocaleResolution {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.split('/').find(|segment| !segment.is_empty()) {
        None => LocaleResolution::Redirect(Locale::DEFAULT),
        Some(first) => resolve_first_segment(first),
    }
}

/// Same decision as [`resolve_path`] for a path the router already split.
pub fn resolve_segments<S: AsRef<str>>(segments: &[S]) -> LocaleResolution {
    match segments
        .iter()
        .map(AsRef::as_ref)
        .find(|segment| !segment.is_empty())
    {
        None => LocaleResolution::Redirect(Locale::DEFAULT),
        Some(first) => resolve_first_segment(first),
    }
}

fn resolve_first_segment(segment: &str) -> LocaleResolution {
    match segment.parse::<Locale>() {
        Ok(locale) => LocaleResolution::Active(locale),
        Err(_) => LocaleResolution::NotFound,
    }
}
