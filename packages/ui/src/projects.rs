use api::types::Project;
use dioxus::prelude::*;

const PROJECTS_CSS: Asset = asset!("/assets/styling/projects.css");

/// Filter value that matches every project.
pub const ALL_CATEGORIES: &str = "all";

/// `"all"` followed by each distinct project category in first-seen order.
pub fn category_filters(projects: &[Project]) -> Vec<String> {
    let mut filters = vec![ALL_CATEGORIES.to_string()];
    for category in projects.iter().filter_map(Project::category) {
        if !filters.iter().any(|f| f == category) {
            filters.push(category.to_string());
        }
    }
    filters
}

pub fn filter_projects<'a>(projects: &'a [Project], filter: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| filter == ALL_CATEGORIES || p.category() == Some(filter))
        .collect()
}

#[component]
pub fn ProjectsSection() -> Element {
    let i18n = crate::use_i18n();
    let projects = use_resource(|| async move { api::featured_projects().await });
    let mut active = use_signal(|| ALL_CATEGORIES.to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: PROJECTS_CSS }
        section { id: "projects", class: "section",
            div { class: "section_header",
                h2 { {i18n.t("projects.title")} }
                p { class: "hint", {i18n.t("projects.subtitle")} }
            }

            match projects() {
                None => rsx! {
                    div { class: "project_grid",
                        for _ in 0..3 {
                            div { class: "card skeleton",
                                h3 { {i18n.t("projects.loading")} }
                                p { class: "summary", "…" }
                            }
                        }
                    }
                },
                Some(result) => {
                    let projects = result.unwrap_or_default();
                    if projects.is_empty() {
                        rsx! { p { class: "hint empty", {i18n.t("projects.empty")} } }
                    } else {
                        let filters = category_filters(&projects);
                        let current = active();
                        let visible: Vec<Project> = filter_projects(&projects, &current)
                            .into_iter()
                            .cloned()
                            .collect();
                        let show_filters = filters.len() > 1;
                        rsx! {
                            if show_filters {
                                div { class: "filter_row", role: "tablist",
                                    for filter in filters {
                                        button {
                                            key: "{filter}",
                                            class: filter_class(filter == current),
                                            role: "tab",
                                            onclick: {
                                                let filter = filter.clone();
                                                move |_| active.set(filter.clone())
                                            },
                                            if filter == ALL_CATEGORIES {
                                                {i18n.t("projects.all")}
                                            } else {
                                                "{filter}"
                                            }
                                        }
                                    }
                                }
                            }
                            div { class: "project_grid",
                                for project in visible {
                                    ProjectCard { key: "{project.id}", project }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn filter_class(active: bool) -> &'static str {
    if active {
        "btn chip active"
    } else {
        "btn chip"
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let i18n = crate::use_i18n();
    let title = project.title(i18n.locale).to_string();
    let description = project.description(i18n.locale).to_string();

    rsx! {
        article { class: "card project_card",
            if let Some(src) = project.image_url.as_ref() {
                img { class: "project_image", src: "{src}", alt: "{title}", loading: "lazy" }
            }
            div { class: "card_top",
                h3 { "{title}" }
                if let Some(category) = project.category() {
                    span { class: "badge", "{category}" }
                }
            }
            p { class: "summary", "{description}" }
            if !project.stack.is_empty() {
                ul { class: "stack",
                    for tech in project.stack.iter() {
                        li { key: "{tech}", class: "stack_item", "{tech}" }
                    }
                }
            }
            div { class: "cta_row",
                if let Some(url) = project.github_url.as_ref() {
                    a { class: "btn", href: "{url}", target: "_blank", rel: "noopener noreferrer", {i18n.t("projects.code")} }
                }
                if let Some(url) = project.live_url.as_ref() {
                    a { class: "btn primary", href: "{url}", target: "_blank", rel: "noopener noreferrer", {i18n.t("projects.live")} }
                }
            }
        }
    }
}
