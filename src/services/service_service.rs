use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;
use validator::Validate;

use super::{ensure_optional, fetch_page};
use crate::{
    dto::{
        offers::OfferList,
        ratings::RatingList,
        services::{CreateServiceRequest, ServiceList, UpdateServiceRequest},
    },
    entity::{Offers, Organizations, Ratings, Services, offers, ratings, services},
    error::{AppError, AppResult},
    models::{Offer, Rating, Service},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_services(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<ServiceList>> {
    let finder = Services::find().order_by_desc(services::Column::CreatedAt);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = ServiceList {
        items: items.into_iter().map(Service::from).collect(),
    };
    Ok(ApiResponse::success("Services", data, Some(meta)))
}

pub async fn get_service(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Service>> {
    let service = find(state, id).await?;
    Ok(ApiResponse::success("Service", Service::from(service), None))
}

pub async fn create_service(
    state: &AppState,
    payload: CreateServiceRequest,
) -> AppResult<ApiResponse<Service>> {
    payload.validate()?;
    ensure_optional::<Organizations>(&state.orm, payload.provider).await?;

    let active = services::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        description: Set(payload.description),
        provider_id: Set(payload.provider),
        ..Default::default()
    };
    let service = active.insert(&state.orm).await?;
    tracing::info!(service_id = %service.id, "service created");

    Ok(ApiResponse::success(
        "Service created",
        Service::from(service),
        Some(Meta::empty()),
    ))
}

pub async fn update_service(
    state: &AppState,
    id: Uuid,
    payload: UpdateServiceRequest,
) -> AppResult<ApiResponse<Service>> {
    payload.validate()?;
    let mut active: services::ActiveModel = find(state, id).await?.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(provider) = payload.provider {
        ensure_optional::<Organizations>(&state.orm, provider).await?;
        active.provider_id = Set(provider);
    }
    let service = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        Service::from(service),
        Some(Meta::empty()),
    ))
}

/// Offers and ratings are not cascaded; a referenced service cannot be deleted.
pub async fn delete_service(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Services::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(service_id = %id, "service deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_service_offers(
    state: &AppState,
    id: Uuid,
    pagination: Pagination,
) -> AppResult<ApiResponse<OfferList>> {
    find(state, id).await?;
    let finder = Offers::find()
        .filter(offers::Column::ItemOfferedId.eq(id))
        .order_by_asc(offers::Column::Price);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = OfferList {
        items: items.into_iter().map(Offer::from).collect(),
    };
    Ok(ApiResponse::success("Offers", data, Some(meta)))
}

pub async fn list_service_ratings(
    state: &AppState,
    id: Uuid,
    pagination: Pagination,
) -> AppResult<ApiResponse<RatingList>> {
    find(state, id).await?;
    let finder = Ratings::find()
        .filter(ratings::Column::SubjectOfId.eq(id))
        .order_by_desc(ratings::Column::CreatedAt);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = RatingList {
        items: items.into_iter().map(Rating::from).collect(),
    };
    Ok(ApiResponse::success("Ratings", data, Some(meta)))
}

async fn find(state: &AppState, id: Uuid) -> AppResult<services::Model> {
    Services::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
