use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;
use validator::Validate;

use super::{ensure_exists, ensure_optional, fetch_page};
use crate::{
    dto::offers::{CreateOfferRequest, OfferList, UpdateOfferRequest},
    entity::{Offers, Organizations, Services, offers},
    error::{AppError, AppResult},
    models::Offer,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_offers(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<OfferList>> {
    let finder = Offers::find().order_by_desc(offers::Column::CreatedAt);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = OfferList {
        items: items.into_iter().map(Offer::from).collect(),
    };
    Ok(ApiResponse::success("Offers", data, Some(meta)))
}

pub async fn get_offer(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Offer>> {
    let offer = find(state, id).await?;
    Ok(ApiResponse::success("Offer", Offer::from(offer), None))
}

/// Without an explicit `offeredBy` the offer is made by the service's provider.
pub async fn create_offer(
    state: &AppState,
    payload: CreateOfferRequest,
) -> AppResult<ApiResponse<Offer>> {
    payload.validate()?;
    let service = ensure_exists::<Services>(&state.orm, payload.item_offered).await?;
    let offered_by = match payload.offered_by {
        Some(organization) => {
            ensure_exists::<Organizations>(&state.orm, organization).await?;
            Some(organization)
        }
        None => service.provider_id,
    };

    let active = offers::ActiveModel {
        id: Set(Uuid::new_v4()),
        price: Set(payload.price),
        price_currency: Set(payload.price_currency),
        item_offered_id: Set(service.id),
        offered_by_id: Set(offered_by),
        ..Default::default()
    };
    let offer = active.insert(&state.orm).await?;
    tracing::info!(offer_id = %offer.id, service_id = %service.id, "offer created");

    Ok(ApiResponse::success(
        "Offer created",
        Offer::from(offer),
        Some(Meta::empty()),
    ))
}

pub async fn update_offer(
    state: &AppState,
    id: Uuid,
    payload: UpdateOfferRequest,
) -> AppResult<ApiResponse<Offer>> {
    payload.validate()?;
    let mut active: offers::ActiveModel = find(state, id).await?.into();
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(price_currency) = payload.price_currency {
        active.price_currency = Set(price_currency);
    }
    if let Some(item_offered) = payload.item_offered {
        ensure_exists::<Services>(&state.orm, item_offered).await?;
        active.item_offered_id = Set(item_offered);
    }
    if let Some(offered_by) = payload.offered_by {
        ensure_optional::<Organizations>(&state.orm, offered_by).await?;
        active.offered_by_id = Set(offered_by);
    }
    let offer = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        Offer::from(offer),
        Some(Meta::empty()),
    ))
}

pub async fn delete_offer(state: &AppState, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Offers::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(offer_id = %id, "offer deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find(state: &AppState, id: Uuid) -> AppResult<offers::Model> {
    Offers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
