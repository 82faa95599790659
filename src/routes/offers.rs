use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::offers::{CreateOfferRequest, OfferList, UpdateOfferRequest},
    error::AppResult,
    models::Offer,
    response::ApiResponse,
    routes::params::Pagination,
    services::offer_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_offers).post(create_offer))
        .route(
            "/{id}",
            get(get_offer).put(update_offer).delete(delete_offer),
        )
}

#[utoipa::path(
    get,
    path = "/api/offers",
    params(Pagination),
    responses(
        (status = 200, description = "List offers", body = ApiResponse<OfferList>)
    ),
    tag = "Offers"
)]
pub async fn list_offers(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OfferList>>> {
    let resp = offer_service::list_offers(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/offers/{id}",
    params(
        ("id" = Uuid, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Get offer", body = ApiResponse<Offer>),
        (status = 404, description = "Offer not found"),
    ),
    tag = "Offers"
)]
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Offer>>> {
    let resp = offer_service::get_offer(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/offers",
    request_body = CreateOfferRequest,
    responses(
        (status = 201, description = "Create offer", body = ApiResponse<Offer>),
        (status = 422, description = "Validation failed or unknown service"),
    ),
    tag = "Offers"
)]
pub async fn create_offer(
    State(state): State<AppState>,
    Json(payload): Json<CreateOfferRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Offer>>)> {
    let resp = offer_service::create_offer(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    params(
        ("id" = Uuid, Path, description = "Offer ID")
    ),
    request_body = UpdateOfferRequest,
    responses(
        (status = 200, description = "Update offer", body = ApiResponse<Offer>),
        (status = 404, description = "Offer not found"),
        (status = 422, description = "Validation failed or unknown reference"),
    ),
    tag = "Offers"
)]
pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOfferRequest>,
) -> AppResult<Json<ApiResponse<Offer>>> {
    let resp = offer_service::update_offer(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    params(
        ("id" = Uuid, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Delete offer", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Offer not found"),
    ),
    tag = "Offers"
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = offer_service::delete_offer(&state, id).await?;
    Ok(Json(resp))
}
