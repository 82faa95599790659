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
        organizations::{CreateOrganizationRequest, OrganizationList, UpdateOrganizationRequest},
        people::PersonList,
        services::ServiceList,
    },
    error::AppResult,
    models::Organization,
    response::ApiResponse,
    routes::params::Pagination,
    services::organization_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_organizations).post(create_organization))
        .route(
            "/{id}",
            get(get_organization)
                .put(update_organization)
                .delete(delete_organization),
        )
        .route("/{id}/members", get(list_members))
        .route("/{id}/offers", get(list_offers))
        .route("/{id}/services", get(list_services))
}

#[utoipa::path(
    get,
    path = "/api/organizations",
    params(Pagination),
    responses(
        (status = 200, description = "List organizations", body = ApiResponse<OrganizationList>)
    ),
    tag = "Organizations"
)]
pub async fn list_organizations(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OrganizationList>>> {
    let resp = organization_service::list_organizations(&state, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/organizations/{id}",
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Get organization", body = ApiResponse<Organization>),
        (status = 404, description = "Organization not found"),
    ),
    tag = "Organizations"
)]
pub async fn get_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Organization>>> {
    let resp = organization_service::get_organization(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/organizations",
    request_body = CreateOrganizationRequest,
    responses(
        (status = 201, description = "Create organization", body = ApiResponse<Organization>),
        (status = 422, description = "Validation failed"),
    ),
    tag = "Organizations"
)]
pub async fn create_organization(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrganizationRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Organization>>)> {
    let resp = organization_service::create_organization(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/organizations/{id}",
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    request_body = UpdateOrganizationRequest,
    responses(
        (status = 200, description = "Update organization", body = ApiResponse<Organization>),
        (status = 404, description = "Organization not found"),
        (status = 422, description = "Validation failed"),
    ),
    tag = "Organizations"
)]
pub async fn update_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrganizationRequest>,
) -> AppResult<Json<ApiResponse<Organization>>> {
    let resp = organization_service::update_organization(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/organizations/{id}",
    params(
        ("id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Delete organization", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Organization not found"),
        (status = 409, description = "Organization is still referenced"),
    ),
    tag = "Organizations"
)]
pub async fn delete_organization(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = organization_service::delete_organization(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/organizations/{id}/members",
    params(
        ("id" = Uuid, Path, description = "Organization ID"),
        Pagination
    ),
    responses(
        (status = 200, description = "People that are members of the organization", body = ApiResponse<PersonList>),
        (status = 404, description = "Organization not found"),
    ),
    tag = "Organizations"
)]
pub async fn list_members(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<PersonList>>> {
    let resp = organization_service::list_members(&state, id, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/organizations/{id}/offers",
    params(
        ("id" = Uuid, Path, description = "Organization ID"),
        Pagination
    ),
    responses(
        (status = 200, description = "Offers made by the organization", body = ApiResponse<OfferList>),
        (status = 404, description = "Organization not found"),
    ),
    tag = "Organizations"
)]
pub async fn list_offers(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<OfferList>>> {
    let resp = organization_service::list_offers_made(&state, id, pagination).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/organizations/{id}/services",
    params(
        ("id" = Uuid, Path, description = "Organization ID"),
        Pagination
    ),
    responses(
        (status = 200, description = "Services provided by the organization", body = ApiResponse<ServiceList>),
        (status = 404, description = "Organization not found"),
    ),
    tag = "Organizations"
)]
pub async fn list_services(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ServiceList>>> {
    let resp = organization_service::list_services_provided(&state, id, pagination).await?;
    Ok(Json(resp))
}
