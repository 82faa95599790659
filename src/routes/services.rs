use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::{
        offers::OfferList,
        ratings::RatingList,
        services::{CreateServiceRequest, ServiceList, UpdateServiceRequest},
    },
    error::AppResult,
    models::Service,
    response::ApiResponse,
    routes::params::Pagination,
    services::service_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services).post(create_service))
        .route(
            "/{id}",
            get(get_service).put(update_service).delete(delete_service),
        )
        .route("/{id}/offers", get(list_offers))
        .route("/{id}/ratings", get(list_ratings))
}

#[utoipa::path(
    get,
    path = "/api/services",
    params(Pagination),
    responses(
        (status = 200, description = "List services", body = ApiResponse<ServiceList>)
    ),
    tag = "Services"
)]
pub async fn list_services(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ServiceList>>> {
    let resp = service_service::list_services(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Get service", body = ApiResponse<Service>),
        (status = 404, description = "Service not found"),
    ),
    tag = "Services"
)]
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let resp = service_service::get_service(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/services",
    request_body = CreateServiceRequest,
    responses(
        (status = 201, description = "Create service", body = ApiResponse<Service>),
        (status = 422, description = "Validation failed or unknown provider"),
    ),
    tag = "Services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Service>>)> {
    let resp = service_service::create_service(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    request_body = UpdateServiceRequest,
    responses(
        (status = 200, description = "Update service", body = ApiResponse<Service>),
        (status = 404, description = "Service not found"),
        (status = 422, description = "Validation failed or unknown provider"),
    ),
    tag = "Services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> AppResult<Json<ApiResponse<Service>>> {
    let resp = service_service::update_service(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(
        ("id" = Uuid, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Delete service", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Service not found"),
        (status = 409, description = "Service still has offers or ratings"),
    ),
    tag = "Services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = service_service::delete_service(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}/offers",
    params(
        ("id" = Uuid, Path, description = "Service ID"),
        Pagination
    ),
    responses(
        (status = 200, description = "Offers on the service", body = ApiResponse<OfferList>),
        (status = 404, description = "Service not found"),
    ),
    tag = "Services"
)]
pub async fn list_offers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OfferList>>> {
    let resp = service_service::list_service_offers(&state, id, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/services/{id}/ratings",
    params(
        ("id" = Uuid, Path, description = "Service ID"),
        Pagination
    ),
    responses(
        (status = 200, description = "Ratings about the service", body = ApiResponse<RatingList>),
        (status = 404, description = "Service not found"),
    ),
    tag = "Services"
)]
pub async fn list_ratings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<RatingList>>> {
    let resp = service_service::list_service_ratings(&state, id, pagination).await?;
    Ok(Json(resp))
}
