use api::types::Skill;
use api::Locale;
use dioxus::prelude::*;

const SKILLS_CSS: Asset = asset!("/assets/styling/skills.css");

/// Coarse level shown next to each proficiency bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProficiencyLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

impl ProficiencyLevel {
    pub fn from_score(proficiency: u8) -> Self {
        match proficiency {
            90.. => ProficiencyLevel::Expert,
            75..=89 => ProficiencyLevel::Advanced,
            60..=74 => ProficiencyLevel::Intermediate,
            _ => ProficiencyLevel::Beginner,
        }
    }

    pub fn message_key(self) -> &'static str {
        match self {
            ProficiencyLevel::Expert => "skills.level.expert",
            ProficiencyLevel::Advanced => "skills.level.advanced",
            ProficiencyLevel::Intermediate => "skills.level.intermediate",
            ProficiencyLevel::Beginner => "skills.level.beginner",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ProficiencyLevel::Expert => "level_expert",
            ProficiencyLevel::Advanced => "level_advanced",
            ProficiencyLevel::Intermediate => "level_intermediate",
            ProficiencyLevel::Beginner => "level_beginner",
        }
    }
}

/// Catalog key for "N skills", singular for exactly one.
pub fn count_key(count: usize) -> &'static str {
    if count == 1 {
        "skills.count_one"
    } else {
        "skills.count"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub icon: &'static str,
    pub accent: &'static str,
    pub skills: Vec<Skill>,
}

/// Icon and accent class for the categories we know about.
fn category_badge(name: &str) -> (&'static str, &'static str) {
    match name {
        "Frontend" => ("🎨", "accent_primary"),
        "Backend" => ("⚙️", "accent_secondary"),
        "Database" | "Base de données" => ("🗄️", "accent_tertiary"),
        "Tools" | "Outils" => ("🛠️", "accent_violet"),
        "DevOps" => ("☁️", "accent_rose"),
        "Mobile" => ("📱", "accent_sky"),
        _ => ("💡", "accent_primary"),
    }
}

/// Group skills by their localized category, keeping first-seen order.
pub fn group_by_category(skills: &[Skill], locale: Locale) -> Vec<SkillCategory> {
    let mut groups: Vec<SkillCategory> = Vec::new();
    for skill in skills {
        let name = skill.category(locale);
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.skills.push(skill.clone()),
            None => {
                let (icon, accent) = category_badge(name);
                groups.push(SkillCategory {
                    name: name.to_string(),
                    icon,
                    accent,
                    skills: vec![skill.clone()],
                });
            }
        }
    }
    groups
}

/// Summary figures under the skill grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillStats {
    pub count: usize,
    /// `None` when there are no skills.
    pub average_proficiency: Option<u8>,
    pub categories: usize,
    pub experts: usize,
}

impl SkillStats {
    pub fn from_skills(skills: &[Skill], locale: Locale) -> Self {
        let count = skills.len();
        let average_proficiency = (count > 0).then(|| {
            let total: u32 = skills.iter().map(|s| u32::from(s.proficiency)).sum();
            (f64::from(total) / count as f64).round() as u8
        });
        Self {
            count,
            average_proficiency,
            categories: group_by_category(skills, locale).len(),
            experts: skills
                .iter()
                .filter(|s| ProficiencyLevel::from_score(s.proficiency) == ProficiencyLevel::Expert)
                .count(),
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    let i18n = crate::use_i18n();
    let skills = use_resource(|| async move { api::featured_skills().await });

    rsx! {
        document::Link { rel: "stylesheet", href: SKILLS_CSS }
        section { id: "skills", class: "section",
            div { class: "section_header",
                h2 { {i18n.t("skills.title")} }
                p { class: "hint", {i18n.t("skills.subtitle")} }
            }

            match skills() {
                None => rsx! {
                    div { class: "skill_grid",
                        for _ in 0..3 {
                            div { class: "card skeleton",
                                h3 { {i18n.t("skills.loading")} }
                            }
                        }
                    }
                },
                // A failed fetch shows the same "no items" state as an empty one.
                Some(result) => {
                    let skills = result.unwrap_or_default();
                    if skills.is_empty() {
                        rsx! { p { class: "hint empty", {i18n.t("skills.empty")} } }
                    } else {
                        let categories = group_by_category(&skills, i18n.locale);
                        let stats = SkillStats::from_skills(&skills, i18n.locale);
                        rsx! {
                            div { class: "skill_grid",
                                for category in categories {
                                    SkillCategoryCard { key: "{category.name}", category }
                                }
                            }
                            SkillStatsPanel { stats }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SkillCategoryCard(category: SkillCategory) -> Element {
    let i18n = crate::use_i18n();
    let count = category.skills.len();
    let count_label = i18n.format(count_key(count), &[("count", count.to_string().as_str())]);

    rsx! {
        div { class: "card skill_category {category.accent}",
            div { class: "card_top",
                span { class: "category_icon", "{category.icon}" }
                h3 { "{category.name}" }
                span { class: "hint", "{count_label}" }
            }
            ul { class: "skill_list",
                for skill in category.skills {
                    SkillRow { key: "{skill.id}", skill }
                }
            }
        }
    }
}

#[component]
fn SkillRow(skill: Skill) -> Element {
    let i18n = crate::use_i18n();
    let level = ProficiencyLevel::from_score(skill.proficiency);
    let description = skill.description(i18n.locale).map(str::to_string);

    rsx! {
        li { class: "skill_row",
            div { class: "skill_head",
                if let Some(icon) = skill.icon.as_ref() {
                    span { class: "skill_icon", "{icon}" }
                }
                span { class: "skill_name", "{skill.name}" }
                span { class: "level {level.css_class()}", {i18n.t(level.message_key())} }
                span { class: "score", "{skill.proficiency}%" }
            }
            div { class: "bar",
                div { class: "bar_fill {level.css_class()}", style: "width: {skill.proficiency}%" }
            }
            if let Some(description) = description {
                p { class: "summary", "{description}" }
            }
        }
    }
}

#[component]
fn SkillStatsPanel(stats: SkillStats) -> Element {
    let i18n = crate::use_i18n();
    let average = stats
        .average_proficiency
        .map(|avg| format!("{avg}%"))
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        div { class: "panel stats",
            div { class: "stat",
                span { class: "stat_value", "{stats.count}+" }
                span { class: "hint", {i18n.t("skills.stats.technologies")} }
            }
            div { class: "stat",
                span { class: "stat_value", "{average}" }
                span { class: "hint", {i18n.t("skills.stats.average")} }
            }
            div { class: "stat",
                span { class: "stat_value", "{stats.categories}" }
                span { class: "hint", {i18n.t("skills.stats.categories")} }
            }
            div { class: "stat",
                span { class: "stat_value", "{stats.experts}" }
                span { class: "hint", {i18n.t("skills.stats.experts")} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(id: i64, category_en: &str, category_fr: &str, proficiency: u8) -> Skill {
        Skill {
            id,
            name: format!("skill-{id}"),
            category_fr: category_fr.to_string(),
            category_en: category_en.to_string(),
            proficiency,
            icon: None,
            description_fr: None,
            description_en: None,
            featured: true,
        }
    }

    #[test]
    fn no_skills_means_no_average() {
        let stats = SkillStats::from_skills(&[], Locale::En);
        assert_eq!(
            stats,
            SkillStats {
                count: 0,
                average_proficiency: None,
                categories: 0,
                experts: 0,
            }
        );
    }

    #[test]
    fn stats_round_the_average_and_count_experts() {
        let skills = [
            skill(1, "Frontend", "Frontend", 95),
            skill(2, "Backend", "Backend", 90),
            skill(3, "Frontend", "Frontend", 60),
        ];
        let stats = SkillStats::from_skills(&skills, Locale::En);
        assert_eq!(stats.count, 3);
        // 245 / 3 = 81.67
        assert_eq!(stats.average_proficiency, Some(82));
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.experts, 2);
    }

    #[test]
    fn grouping_follows_locale_and_first_seen_order() {
        let skills = [
            skill(1, "Database", "Base de données", 80),
            skill(2, "Frontend", "Frontend", 70),
            skill(3, "Database", "Base de données", 60),
        ];
        let en = group_by_category(&skills, Locale::En);
        assert_eq!(
            en.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(),
            vec!["Database", "Frontend"]
        );
        assert_eq!(en[0].skills.len(), 2);
        assert_eq!(en[0].icon, "🗄️");

        let fr = group_by_category(&skills, Locale::Fr);
        assert_eq!(fr[0].name, "Base de données");
        assert_eq!(fr[0].icon, "🗄️");
    }

    #[test]
    fn single_skill_categories_use_the_singular() {
        for (locale, one, many) in [
            (Locale::En, "1 skill", "3 skills"),
            (Locale::Fr, "1 compétence", "3 compétences"),
        ] {
            let catalog = crate::i18n::load_catalog(locale);
            assert_eq!(catalog.format(count_key(1), &[("count", "1")]), one);
            assert_eq!(catalog.format(count_key(3), &[("count", "3")]), many);
        }
    }

    #[test]
    fn unknown_categories_get_the_default_badge() {
        let groups = group_by_category(&[skill(1, "Cooking", "Cuisine", 50)], Locale::En);
        assert_eq!(groups[0].icon, "💡");
    }

    #[test]
    fn proficiency_levels_use_inclusive_thresholds() {
        assert_eq!(ProficiencyLevel::from_score(100), ProficiencyLevel::Expert);
        assert_eq!(ProficiencyLevel::from_score(90), ProficiencyLevel::Expert);
        assert_eq!(ProficiencyLevel::from_score(89), ProficiencyLevel::Advanced);
        assert_eq!(ProficiencyLevel::from_score(75), ProficiencyLevel::Advanced);
        assert_eq!(ProficiencyLevel::from_score(60), ProficiencyLevel::Intermediate);
        assert_eq!(ProficiencyLevel::from_score(59), ProficiencyLevel::Beginner);
        assert_eq!(ProficiencyLevel::from_score(0), ProficiencyLevel::Beginner);
    }
}
