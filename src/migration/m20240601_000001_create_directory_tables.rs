use sea_orm::{EntityTrait, Schema};
use sea_orm_migration::prelude::*;

use crate::entity::{offers, organizations, ratings, services, users};

#[derive(DeriveMigrationName)]
pub struct Migration;

impl Migration {
    async fn create<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());
        manager
            .create_table(
                schema
                    .create_table_from_entity(entity)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn drop<E: EntityTrait>(manager: &SchemaManager<'_>, entity: E) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(entity).if_exists().to_owned())
            .await
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    // Tables are created in foreign-key order.
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        Self::create(manager, organizations::Entity).await?;
        Self::create(manager, users::Entity).await?;
        Self::create(manager, services::Entity).await?;
        Self::create(manager, offers::Entity).await?;
        Self::create(manager, ratings::Entity).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        Self::drop(manager, ratings::Entity).await?;
        Self::drop(manager, offers::Entity).await?;
        Self::drop(manager, services::Entity).await?;
        Self::drop(manager, users::Entity).await?;
        Self::drop(manager, organizations::Entity).await?;
        Ok(())
    }
}
