//! This crate contains all shared UI for the workspace.

mod i18n;
pub use i18n::{
    load_catalog, load_catalog_for_code, preferred_locale, remember_locale, use_i18n,
    CatalogError, I18n, I18nProvider, MessageCatalog, LOCALE_STORAGE_KEY, REQUIRED_KEYS,
};

mod theme;
pub use theme::FolioTheme;

mod header;
pub use header::Header;

mod language_switcher;
pub use language_switcher::LanguageSwitcher;

mod hero;
pub use hero::Hero;

mod about;
pub use about::About;

mod skills;
pub use skills::{group_by_category, ProficiencyLevel, SkillCategory, SkillStats, SkillsSection};

mod projects;
pub use projects::{category_filters, filter_projects, ProjectsSection, ALL_CATEGORIES};

mod contact;
pub use contact::{failure_key, ContactSection, SubmitStatus};

mod footer;
pub use footer::Footer;

mod not_found;
pub use not_found::NotFound;
