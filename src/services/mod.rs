use sea_orm::{EntityTrait, PaginatorTrait, PrimaryKeyTrait, QuerySelect, Select};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    error::{AppError, AppResult},
    response::Meta,
    routes::params::Pagination,
};

pub mod offer_service;
pub mod organization_service;
pub mod person_service;
pub mod rating_service;
pub mod service_service;

/// Runs `finder` for one page and counts the full result set.
pub(crate) async fn fetch_page<E>(
    conn: &OrmConn,
    finder: Select<E>,
    pagination: Pagination,
) -> AppResult<(Vec<E::Model>, Meta)>
where
    E: EntityTrait,
    E::Model: Sync + 'static,
{
    let (page, limit, offset) = pagination.normalize();
    let total = finder.clone().count(conn).await? as i64;
    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(conn)
        .await?;
    Ok((items, Meta::new(page, limit, total)))
}

/// Fails with [`AppError::Referential`] unless a row with `id` exists.
pub(crate) async fn ensure_exists<E>(conn: &OrmConn, id: Uuid) -> AppResult<E::Model>
where
    E: EntityTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(id).one(conn).await?.ok_or_else(|| {
        AppError::Referential(format!("{} {id} does not exist", E::default().table_name()))
    })
}

/// Like [`ensure_exists`] for optional references.
pub(crate) async fn ensure_optional<E>(conn: &OrmConn, id: Option<Uuid>) -> AppResult<()>
where
    E: EntityTrait,
    Uuid: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    if let Some(id) = id {
        ensure_exists::<E>(conn, id).await?;
    }
    Ok(())
}
