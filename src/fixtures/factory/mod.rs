//! Factories build entity rows with randomized defaults.
//!
//! Every factory works on a sea-orm `ActiveModel`: [`Factory::defaults`] fills
//! each plain column with a random value, and the caller's overrides (another
//! `ActiveModel`, usually built with `..Default::default()`) win field by field
//! wherever they are `Set`. Required relations that are still unset afterwards
//! are satisfied by creating the related row through its own factory.
//!
//! [`Factory::random`] and friends pick rows that already exist, so wiring a
//! relation does not insert anything. Picking from an empty table fails with
//! [`SeedError::NotFound`]; populate tables in dependency order.

use rand::seq::SliceRandom;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, EntityTrait,
    FromQueryResult, IntoActiveModel, Iterable, ModelTrait, PaginatorTrait, PrimaryKeyToColumn,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use super::error::{SeedError, SeedResult};
use super::faker::Faker;
use crate::password::PasswordHasher;

mod offer;
mod organization;
mod rating;
mod service;
mod user;

pub use offer::OfferFactory;
pub use organization::OrganizationFactory;
pub use rating::RatingFactory;
pub use service::ServiceFactory;
pub use user::{DEFAULT_PASSWORD, UserFactory};

/// Random source and password hasher threaded through every factory call.
#[derive(Debug)]
pub struct SeedContext {
    pub faker: Faker,
    pub hasher: PasswordHasher,
}

impl SeedContext {
    pub fn new(faker: Faker, hasher: PasswordHasher) -> Self {
        Self { faker, hasher }
    }
}

#[allow(async_fn_in_trait)]
pub trait Factory {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Clone
        + Default
        + Send
        + Sync
        + 'static;

    /// Entity name used in error messages.
    const NAME: &'static str;

    /// Randomized plain attributes. Relations are left unset.
    fn defaults(faker: &mut Faker) -> Self::ActiveModel;

    /// Fills required relations the overrides left unset.
    async fn wire<C: ConnectionTrait>(
        _conn: &C,
        _ctx: &mut SeedContext,
        model: Self::ActiveModel,
    ) -> SeedResult<Self::ActiveModel> {
        Ok(model)
    }

    /// Runs on the merged attributes right before insertion.
    fn after_instantiate(
        _ctx: &mut SeedContext,
        model: Self::ActiveModel,
    ) -> SeedResult<Self::ActiveModel> {
        Ok(model)
    }

    /// Builds, wires and inserts one row.
    async fn create_one<C: ConnectionTrait>(
        conn: &C,
        ctx: &mut SeedContext,
        overrides: Self::ActiveModel,
    ) -> SeedResult<Self::Model> {
        let model = merge_overrides(Self::defaults(&mut ctx.faker), &overrides);
        let model = Self::wire(conn, ctx, model).await?;
        let model = Self::after_instantiate(ctx, model)?;
        Ok(model.insert(conn).await?)
    }

    /// `count` rows sharing the same overrides.
    async fn create_many<C: ConnectionTrait>(
        conn: &C,
        ctx: &mut SeedContext,
        count: usize,
        overrides: Self::ActiveModel,
    ) -> SeedResult<Vec<Self::Model>> {
        let mut created = Vec::with_capacity(count);
        for _ in 0..count {
            created.push(Self::create_one(conn, ctx, overrides.clone()).await?);
        }
        Ok(created)
    }

    /// `count` rows whose overrides are produced anew for each row.
    async fn create_many_with<C, G>(
        conn: &C,
        ctx: &mut SeedContext,
        count: usize,
        mut generator: G,
    ) -> SeedResult<Vec<Self::Model>>
    where
        C: ConnectionTrait,
        G: AsyncFnMut(&mut SeedContext) -> SeedResult<Self::ActiveModel>,
    {
        let mut created = Vec::with_capacity(count);
        for _ in 0..count {
            let overrides = generator(ctx).await?;
            created.push(Self::create_one(conn, ctx, overrides).await?);
        }
        Ok(created)
    }

    async fn count<C: ConnectionTrait>(conn: &C) -> SeedResult<u64> {
        Ok(Self::Entity::find().count(conn).await?)
    }

    /// One persisted row, chosen uniformly.
    async fn random<C: ConnectionTrait>(conn: &C, ctx: &mut SeedContext) -> SeedResult<Self::Model> {
        Self::random_by(conn, ctx, Condition::all()).await
    }

    /// One persisted row matching `condition`, chosen uniformly.
    async fn random_by<C: ConnectionTrait>(
        conn: &C,
        ctx: &mut SeedContext,
        condition: Condition,
    ) -> SeedResult<Self::Model> {
        let total = Self::Entity::find()
            .filter(condition.clone())
            .count(conn)
            .await?;
        if total == 0 {
            return Err(SeedError::NotFound { entity: Self::NAME });
        }
        let offset = ctx.faker.between(0..total);
        by_primary_key(Self::Entity::find().filter(condition))
            .offset(offset)
            .one(conn)
            .await?
            .ok_or(SeedError::NotFound { entity: Self::NAME })
    }

    /// `size` distinct persisted rows.
    async fn random_set<C: ConnectionTrait>(
        conn: &C,
        ctx: &mut SeedContext,
        size: usize,
    ) -> SeedResult<Vec<Self::Model>> {
        let rows = by_primary_key(Self::Entity::find()).all(conn).await?;
        if rows.len() < size {
            return Err(SeedError::Insufficient {
                entity: Self::NAME,
                wanted: size,
                available: rows.len(),
            });
        }
        Ok(rows
            .choose_multiple(ctx.faker.rng(), size)
            .cloned()
            .collect())
    }

    /// Between `min` and `max` (inclusive) distinct persisted rows.
    async fn random_range<C: ConnectionTrait>(
        conn: &C,
        ctx: &mut SeedContext,
        min: usize,
        max: usize,
    ) -> SeedResult<Vec<Self::Model>> {
        let size = ctx.faker.between(min..=max.max(min));
        Self::random_set(conn, ctx, size).await
    }
}

/// Offsets only select the same row for the same seed under a fixed order.
fn by_primary_key<E: EntityTrait>(mut select: Select<E>) -> Select<E> {
    for key in <E::PrimaryKey as Iterable>::iter() {
        select = select.order_by_asc(key.into_column());
    }
    select
}

/// Copies every `Set` (or `Unchanged`) column of `overrides` onto `base`.
pub fn merge_overrides<A>(mut base: A, overrides: &A) -> A
where
    A: ActiveModelTrait,
{
    for column in <<A::Entity as EntityTrait>::Column as Iterable>::iter() {
        match overrides.get(column) {
            ActiveValue::Set(value) | ActiveValue::Unchanged(value) => base.set(column, value),
            ActiveValue::NotSet => {}
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::organizations;
    use sea_orm::Set;

    #[test]
    fn overrides_win_field_by_field() {
        let mut faker = Faker::seeded(42);
        let defaults = OrganizationFactory::defaults(&mut faker);
        let overrides = organizations::ActiveModel {
            legal_name: Set(Some("Acme Holdings".into())),
            lei_code: Set(None),
            ..Default::default()
        };

        let merged = merge_overrides(defaults.clone(), &overrides);

        assert_eq!(merged.legal_name, Set(Some("Acme Holdings".into())));
        assert_eq!(merged.lei_code, Set(None));
        assert_eq!(merged.logo, defaults.logo);
        assert_eq!(merged.id, defaults.id);
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let mut faker = Faker::seeded(42);
        let defaults = OrganizationFactory::defaults(&mut faker);
        let merged = merge_overrides(defaults.clone(), &Default::default());
        assert_eq!(merged, defaults);
    }
}
