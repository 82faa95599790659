use schema_directory_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    fixtures::{Faker, LoadMode, SeedContext, SeedPlan, load},
    password::PasswordHasher,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,schema_directory_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let faker = match config.fixtures_seed {
        Some(seed) => {
            tracing::info!(seed, "seeding with a fixed rng seed");
            Faker::seeded(seed)
        }
        None => Faker::from_entropy(),
    };
    let mut ctx = SeedContext::new(faker, PasswordHasher::new(config.password_cost));
    let mode = if config.fixtures_append {
        LoadMode::Append
    } else {
        LoadMode::Purge
    };

    let report = load(&orm, &mut ctx, &SeedPlan::default(), mode).await?;
    tracing::info!(
        ?mode,
        organizations = report.organizations,
        people = report.users,
        services = report.services,
        offers = report.offers,
        ratings = report.ratings,
        "seed completed"
    );
    Ok(())
}
