//! Seeds a referentially valid sample dataset.
//!
//! Tables are populated strictly in dependency order: organizations, users,
//! services, offers, ratings. Every relation is wired to rows created earlier
//! in the same run, so a random pick can only fail when a count in the plan
//! is zero.

use std::ops::RangeInclusive;

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use serde_json::json;

use super::error::{SeedError, SeedResult};
use super::factory::{
    Factory, OfferFactory, OrganizationFactory, RatingFactory, SeedContext, ServiceFactory,
    UserFactory,
};
use crate::entity::{offers, organizations, ratings, services, users};

pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_ORGANIZATION_ADMIN: &str = "ROLE_ORGANIZATION_ADMIN";
pub const ROLE_ORGANIZATION_MANAGER: &str = "ROLE_ORGANIZATION_MANAGER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
}

impl Default for AdminAccount {
    fn default() -> Self {
        Self {
            email: "admin@admin.com".to_string(),
            password: "admin".to_string(),
        }
    }
}

/// How many rows of each kind a run creates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    /// Organizations, each created together with one admin member.
    pub organizations: usize,
    /// Managers, each a member of a random organization.
    pub managers: usize,
    pub admin: Option<AdminAccount>,
    /// People without any organization.
    pub users: usize,
    pub services: usize,
    pub offers: usize,
    pub ratings_per_service: RangeInclusive<usize>,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            organizations: 5,
            managers: 15,
            admin: Some(AdminAccount::default()),
            users: 20,
            services: 20,
            offers: 20,
            ratings_per_service: 0..=10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Wipe every table first.
    Purge,
    /// Keep existing rows.
    Append,
}

/// Row counts after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedReport {
    pub organizations: u64,
    pub users: u64,
    pub services: u64,
    pub offers: u64,
    pub ratings: u64,
}

impl SeedReport {
    pub async fn collect<C: ConnectionTrait>(conn: &C) -> SeedResult<Self> {
        Ok(Self {
            organizations: OrganizationFactory::count(conn).await?,
            users: UserFactory::count(conn).await?,
            services: ServiceFactory::count(conn).await?,
            offers: OfferFactory::count(conn).await?,
            ratings: RatingFactory::count(conn).await?,
        })
    }
}

/// Runs the whole plan in one transaction. Nothing is committed on error.
pub async fn load(
    db: &DatabaseConnection,
    ctx: &mut SeedContext,
    plan: &SeedPlan,
    mode: LoadMode,
) -> SeedResult<SeedReport> {
    let txn = db.begin().await?;
    if mode == LoadMode::Purge {
        purge(&txn).await?;
    }
    seed(&txn, ctx, plan).await?;
    let report = SeedReport::collect(&txn).await?;
    txn.commit().await?;
    tracing::info!(
        organizations = report.organizations,
        users = report.users,
        services = report.services,
        offers = report.offers,
        ratings = report.ratings,
        "fixtures loaded"
    );
    Ok(report)
}

/// Deletes every row, dependents first.
pub async fn purge<C: ConnectionTrait>(conn: &C) -> SeedResult<()> {
    ratings::Entity::delete_many().exec(conn).await?;
    offers::Entity::delete_many().exec(conn).await?;
    services::Entity::delete_many().exec(conn).await?;
    users::Entity::delete_many().exec(conn).await?;
    organizations::Entity::delete_many().exec(conn).await?;
    tracing::info!("purged fixture tables");
    Ok(())
}

/// Applies `plan` on top of whatever `conn` already holds.
pub async fn seed<C: ConnectionTrait>(
    conn: &C,
    ctx: &mut SeedContext,
    plan: &SeedPlan,
) -> SeedResult<()> {
    let organizations =
        OrganizationFactory::create_many(conn, ctx, plan.organizations, Default::default()).await?;
    for organization in &organizations {
        UserFactory::create_one(
            conn,
            ctx,
            users::ActiveModel {
                member_of_id: Set(Some(organization.id)),
                roles: Set(json!([ROLE_ORGANIZATION_ADMIN])),
                ..Default::default()
            },
        )
        .await?;
    }
    tracing::debug!(count = organizations.len(), "seeded organizations");

    UserFactory::create_many_with(conn, ctx, plan.managers, async |ctx: &mut SeedContext| {
        let organization = OrganizationFactory::random(conn, ctx).await?;
        Ok::<_, SeedError>(users::ActiveModel {
            member_of_id: Set(Some(organization.id)),
            roles: Set(json!([ROLE_ORGANIZATION_MANAGER])),
            ..Default::default()
        })
    })
    .await?;

    if let Some(admin) = plan.admin.as_ref() {
        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(admin.email.as_str()))
            .one(conn)
            .await?;
        if existing.is_some() {
            tracing::info!(email = %admin.email, "admin account already present");
        } else {
            create_admin(conn, ctx, admin).await?;
        }
    }

    UserFactory::create_many(conn, ctx, plan.users, Default::default()).await?;
    tracing::debug!("seeded users");

    let services =
        ServiceFactory::create_many_with(conn, ctx, plan.services, async |ctx: &mut SeedContext| {
            let provider = OrganizationFactory::random(conn, ctx).await?;
            Ok::<_, SeedError>(services::ActiveModel {
                provider_id: Set(Some(provider.id)),
                ..Default::default()
            })
        })
        .await?;
    tracing::debug!(count = services.len(), "seeded services");

    OfferFactory::create_many_with(conn, ctx, plan.offers, async |ctx: &mut SeedContext| {
        let service = ServiceFactory::random(conn, ctx).await?;
        Ok::<_, SeedError>(offers::ActiveModel {
            item_offered_id: Set(service.id),
            offered_by_id: Set(service.provider_id),
            ..Default::default()
        })
    })
    .await?;
    tracing::debug!(count = plan.offers, "seeded offers");

    let unaffiliated = Condition::all().add(users::Column::MemberOfId.is_null());
    for service in &services {
        let count = ctx.faker.between(plan.ratings_per_service.clone());
        RatingFactory::create_many_with(conn, ctx, count, async |ctx: &mut SeedContext| {
            let author = UserFactory::random_by(conn, ctx, unaffiliated.clone()).await?;
            Ok::<_, SeedError>(ratings::ActiveModel {
                author_id: Set(Some(author.id)),
                subject_of_id: Set(Some(service.id)),
                ..Default::default()
            })
        })
        .await?;
    }
    tracing::debug!("seeded ratings");

    Ok(())
}

async fn create_admin<C: ConnectionTrait>(
    conn: &C,
    ctx: &mut SeedContext,
    admin: &AdminAccount,
) -> SeedResult<users::Model> {
    UserFactory::create_one(
        conn,
        ctx,
        users::ActiveModel {
            email: Set(admin.email.clone()),
            password: Set(admin.password.clone()),
            roles: Set(json!([ROLE_ADMIN])),
            ..Default::default()
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_matches_reference_dataset() {
        let plan = SeedPlan::default();
        assert_eq!(plan.organizations, 5);
        assert_eq!(plan.managers, 15);
        assert_eq!(plan.users, 20);
        assert_eq!(plan.services, 20);
        assert_eq!(plan.offers, 20);
        assert_eq!(plan.ratings_per_service, 0..=10);
        assert_eq!(plan.admin.as_ref().map(|a| a.email.as_str()), Some("admin@admin.com"));
    }
}
