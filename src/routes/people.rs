use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::people::{CreatePersonRequest, PersonList, UpdatePersonRequest},
    error::AppResult,
    models::Person,
    response::ApiResponse,
    routes::params::Pagination,
    services::person_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_people).post(create_person))
        .route(
            "/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
}

#[utoipa::path(
    get,
    path = "/api/people",
    params(Pagination),
    responses(
        (status = 200, description = "List people", body = ApiResponse<PersonList>)
    ),
    tag = "People"
)]
pub async fn list_people(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<PersonList>>> {
    let resp = person_service::list_people(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/people/{id}",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Get person", body = ApiResponse<Person>),
        (status = 404, description = "Person not found"),
    ),
    tag = "People"
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Person>>> {
    let resp = person_service::get_person(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/people",
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Create person", body = ApiResponse<Person>),
        (status = 409, description = "Email is already taken"),
        (status = 422, description = "Validation failed or unknown organization"),
    ),
    tag = "People"
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<CreatePersonRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Person>>)> {
    let resp = person_service::create_person(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/people/{id}",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Update person", body = ApiResponse<Person>),
        (status = 404, description = "Person not found"),
        (status = 409, description = "Email is already taken"),
    ),
    tag = "People"
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePersonRequest>,
) -> AppResult<Json<ApiResponse<Person>>> {
    let resp = person_service::update_person(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/people/{id}",
    params(
        ("id" = Uuid, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Delete person", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Person not found"),
        (status = 409, description = "Person is still referenced"),
    ),
    tag = "People"
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = person_service::delete_person(&state, id).await?;
    Ok(Json(resp))
}
