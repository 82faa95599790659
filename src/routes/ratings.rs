use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::ratings::{CreateRatingRequest, RatingList, UpdateRatingRequest},
    error::AppResult,
    models::Rating,
    response::ApiResponse,
    routes::params::Pagination,
    services::rating_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ratings).post(create_rating))
        .route(
            "/{id}",
            get(get_rating).put(update_rating).delete(delete_rating),
        )
}

#[utoipa::path(
    get,
    path = "/api/ratings",
    params(Pagination),
    responses(
        (status = 200, description = "List ratings", body = ApiResponse<RatingList>)
    ),
    tag = "Ratings"
)]
pub async fn list_ratings(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<RatingList>>> {
    let resp = rating_service::list_ratings(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/ratings/{id}",
    params(
        ("id" = Uuid, Path, description = "Rating ID")
    ),
    responses(
        (status = 200, description = "Get rating", body = ApiResponse<Rating>),
        (status = 404, description = "Rating not found"),
    ),
    tag = "Ratings"
)]
pub async fn get_rating(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Rating>>> {
    let resp = rating_service::get_rating(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/ratings",
    request_body = CreateRatingRequest,
    responses(
        (status = 201, description = "Create rating", body = ApiResponse<Rating>),
        (status = 422, description = "Validation failed or unknown reference"),
    ),
    tag = "Ratings"
)]
pub async fn create_rating(
    State(state): State<AppState>,
    Json(payload): Json<CreateRatingRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Rating>>)> {
    let resp = rating_service::create_rating(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/ratings/{id}",
    params(
        ("id" = Uuid, Path, description = "Rating ID")
    ),
    request_body = UpdateRatingRequest,
    responses(
        (status = 200, description = "Update rating", body = ApiResponse<Rating>),
        (status = 404, description = "Rating not found"),
        (status = 422, description = "Validation failed or unknown reference"),
    ),
    tag = "Ratings"
)]
pub async fn update_rating(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRatingRequest>,
) -> AppResult<Json<ApiResponse<Rating>>> {
    let resp = rating_service::update_rating(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/ratings/{id}",
    params(
        ("id" = Uuid, Path, description = "Rating ID")
    ),
    responses(
        (status = 200, description = "Delete rating", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Rating not found"),
    ),
    tag = "Ratings"
)]
pub async fn delete_rating(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = rating_service::delete_rating(&state, id).await?;
    Ok(Json(resp))
}
