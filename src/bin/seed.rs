//! Reference data seeder
//!
//! Populates lifecycle states, report categories and municipal departments.
//! Idempotent: when states already exist the run is a no-op.
//!
//! Run with: cargo run --bin seed

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sirse_server::config::AppConfig;

/// Lifecycle states in code order. Statistics queries rely on the first
/// three receiving ids 1, 2 and 3, so the order must not change.
const STATES: [(&str, &str); 5] = [
    ("Pendiente", "Reporte recibido, pendiente de revisión"),
    ("En proceso", "Reporte en proceso de atención"),
    ("Resuelto", "Reporte atendido y resuelto"),
    ("Rechazado", "Reporte no válido o duplicado"),
    ("Cerrado", "Reporte cerrado"),
];

const CATEGORIES: [(&str, &str); 11] = [
    ("Seguridad", "Reportes relacionados con seguridad pública"),
    ("Robo", "Reportes de robos o asaltos"),
    ("Accidente", "Reportes de accidentes viales"),
    ("Vandalismo", "Actos de vandalismo o daños a propiedad"),
    ("Persona sospechosa", "Reportes de personas con actitud sospechosa"),
    ("Alumbrado público", "Problemas con iluminación en vías públicas"),
    ("Baches", "Reportes de baches en calles"),
    ("Basura", "Acumulación de basura o residuos"),
    ("Fuga de agua", "Reportes de fugas de agua"),
    ("Animal callejero", "Presencia de animales en la vía pública"),
    ("Otro", "Otros tipos de reportes"),
];

const DEPARTMENTS: [(&str, &str); 8] = [
    ("Alumbrado Público", "Mantenimiento de alumbrado público y luminarias"),
    ("Servicios Municipales", "Servicios generales y atención ciudadana"),
    ("Parques y Jardines", "Mantenimiento de áreas verdes y espacios públicos"),
    ("Obras Públicas", "Construcción y mantenimiento de infraestructura urbana"),
    ("Seguridad Pública", "Protección y seguridad ciudadana"),
    ("Protección Civil", "Emergencias y protección civil"),
    ("Tránsito y Vialidad", "Control de tránsito y mantenimiento vial"),
    ("Desarrollo Urbano", "Planificación y desarrollo urbano"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "seed=info,sirse_server=info".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().expect("Failed to load configuration");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let existing_states: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM states")
        .fetch_one(&pool)
        .await?;

    if existing_states > 0 {
        let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await?;
        let departments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
            .fetch_one(&pool)
            .await?;
        tracing::warn!(
            "Reference data already present ({} states, {} categories, {} departments); nothing to do",
            existing_states,
            categories,
            departments
        );
        return Ok(());
    }

    tracing::info!("Seeding reference data");

    for (name, description) in STATES {
        sqlx::query("INSERT INTO states (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(&pool)
            .await?;
    }
    tracing::info!("Inserted {} lifecycle states", STATES.len());

    for (name, description) in CATEGORIES {
        sqlx::query("INSERT INTO categories (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(&pool)
            .await?;
    }
    tracing::info!("Inserted {} categories", CATEGORIES.len());

    for (name, description) in DEPARTMENTS {
        sqlx::query("INSERT INTO departments (name, description) VALUES ($1, $2)")
            .bind(name)
            .bind(description)
            .execute(&pool)
            .await?;
    }
    tracing::info!("Inserted {} departments", DEPARTMENTS.len());

    tracing::info!(
        "Database seeded: {} states, {} categories, {} departments",
        STATES.len(),
        CATEGORIES.len(),
        DEPARTMENTS.len()
    );

    Ok(())
}
