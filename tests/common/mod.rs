#![allow(dead_code)]

use schema_directory_api::{
    db::{OrmConn, create_orm_conn, run_migrations},
    fixtures::{Faker, SeedContext},
    password::{HashCost, PasswordHasher},
    state::AppState,
};

/// Fresh migrated in-memory database.
pub async fn memory_db() -> OrmConn {
    let orm = create_orm_conn("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    run_migrations(&orm).await.expect("apply migrations");
    orm
}

pub fn low_cost_hasher() -> PasswordHasher {
    PasswordHasher::new(HashCost::Low)
}

pub fn seed_context(seed: u64) -> SeedContext {
    SeedContext::new(Faker::seeded(seed), low_cost_hasher())
}

pub async fn app_state() -> AppState {
    AppState {
        orm: memory_db().await,
        hasher: low_cost_hasher(),
    }
}
