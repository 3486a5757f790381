use anyhow::{Context, Result};
use sqlx::{Any, Pool};

struct SeedSkill {
    name: &'static str,
    category_fr: &'static str,
    category_en: &'static str,
    proficiency: i64,
    icon: &'static str,
    description_fr: &'static str,
    description_en: &'static str,
    featured: bool,
}

struct SeedProject {
    title_fr: &'static str,
    title_en: &'static str,
    description_fr: &'static str,
    description_en: &'static str,
    stack: &'static [&'static str],
    github_url: Option<&'static str>,
    live_url: Option<&'static str>,
    category: Option<&'static str>,
    featured: bool,
}

const SKILLS: &[SeedSkill] = &[
    SeedSkill {
        name: "React",
        category_fr: "Frontend",
        category_en: "Frontend",
        proficiency: 92,
        icon: "⚛️",
        description_fr: "Interfaces composables et accessibles",
        description_en: "Composable, accessible interfaces",
        featured: true,
    },
    SeedSkill {
        name: "TypeScript",
        category_fr: "Frontend",
        category_en: "Frontend",
        proficiency: 88,
        icon: "🔷",
        description_fr: "Typage strict de bout en bout",
        description_en: "Strict typing end to end",
        featured: true,
    },
    SeedSkill {
        name: "Node.js",
        category_fr: "Backend",
        category_en: "Backend",
        proficiency: 80,
        icon: "🟢",
        description_fr: "API REST et tâches planifiées",
        description_en: "REST APIs and scheduled jobs",
        featured: true,
    },
    SeedSkill {
        name: "PostgreSQL",
        category_fr: "Base de données",
        category_en: "Database",
        proficiency: 74,
        icon: "🐘",
        description_fr: "Modélisation et requêtes",
        description_en: "Modelling and querying",
        featured: true,
    },
    SeedSkill {
        name: "Docker",
        category_fr: "DevOps",
        category_en: "DevOps",
        proficiency: 65,
        icon: "🐳",
        description_fr: "Conteneurs pour le dev et la prod",
        description_en: "Containers for dev and prod",
        featured: true,
    },
    SeedSkill {
        name: "COBOL",
        category_fr: "Outils",
        category_en: "Tools",
        proficiency: 20,
        icon: "📼",
        description_fr: "Pour le plaisir",
        description_en: "For fun",
        featured: false,
    },
];

const PROJECTS: &[SeedProject] = &[
    SeedProject {
        title_fr: "Tableau de bord logistique",
        title_en: "Logistics dashboard",
        description_fr: "Suivi en temps réel des livraisons pour une PME.",
        description_en: "Real-time delivery tracking for a small business.",
        stack: &["Next.js", "Supabase", "Bootstrap"],
        github_url: Some("https://github.com/example/logistics"),
        live_url: None,
        category: Some("web"),
        featured: true,
    },
    SeedProject {
        title_fr: "Application de réservation",
        title_en: "Booking app",
        description_fr: "Réservation de créneaux avec rappels par SMS.",
        description_en: "Slot booking with SMS reminders.",
        stack: &["React Native", "Node.js"],
        github_url: None,
        live_url: Some("https://booking.example.com"),
        category: Some("mobile"),
        featured: true,
    },
    SeedProject {
        title_fr: "API de facturation",
        title_en: "Invoicing API",
        description_fr: "Génération de factures PDF et export comptable.",
        description_en: "PDF invoice generation and accounting export.",
        stack: &["Node.js", "PostgreSQL"],
        github_url: Some("https://github.com/example/invoicing"),
        live_url: None,
        category: Some("web"),
        featured: true,
    },
    SeedProject {
        title_fr: "Brouillon",
        title_en: "Draft",
        description_fr: "Pas encore prêt.",
        description_en: "Not ready yet.",
        stack: &[],
        github_url: None,
        live_url: None,
        category: None,
        featured: false,
    },
];

pub async fn seed_content(pool: &Pool<Any>) -> Result<()> {
    tracing::info!("Starting content seeding...");

    for skill in SKILLS {
        sqlx::query(
            r#"
            INSERT INTO skills (name, category_fr, category_en, proficiency, icon, description_fr, description_en, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(skill.name)
        .bind(skill.category_fr)
        .bind(skill.category_en)
        .bind(skill.proficiency)
        .bind(skill.icon)
        .bind(skill.description_fr)
        .bind(skill.description_en)
        .bind(i64::from(skill.featured))
        .execute(pool)
        .await
        .with_context(|| format!("Failed to seed skill {}", skill.name))?;
    }

    for project in PROJECTS {
        let stack = serde_json::to_string(project.stack)?;
        sqlx::query(
            r#"
            INSERT INTO projects (title_fr, title_en, description_fr, description_en, stack, github_url, live_url, category, featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(project.title_fr)
        .bind(project.title_en)
        .bind(project.description_fr)
        .bind(project.description_en)
        .bind(stack)
        .bind(project.github_url)
        .bind(project.live_url)
        .bind(project.category)
        .bind(i64::from(project.featured))
        .execute(pool)
        .await
        .with_context(|| format!("Failed to seed project {}", project.title_en))?;
    }

    tracing::info!(
        "✓ Seeded {} skills and {} projects",
        SKILLS.len(),
        PROJECTS.len()
    );
    Ok(())
}
