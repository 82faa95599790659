use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;
use validator::Validate;

use super::fetch_page;
use crate::{
    dto::{
        offers::OfferList,
        organizations::{CreateOrganizationRequest, OrganizationList, UpdateOrganizationRequest},
        people::PersonList,
        services::ServiceList,
    },
    entity::{
        Offers, Organizations, Services, Users, offers, organizations, services, users,
    },
    error::{AppError, AppResult},
    models::{Offer, Organization, Person, Service},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_organizations(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<OrganizationList>> {
    let finder = Organizations::find().order_by_asc(organizations::Column::LegalName);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = OrganizationList {
        items: items.into_iter().map(Organization::from).collect(),
    };
    Ok(ApiResponse::success("Organizations", data, Some(meta)))
}

pub async fn get_organization(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Organization>> {
    let organization = find(state, id).await?;
    Ok(ApiResponse::success(
        "Organization",
        Organization::from(organization),
        None,
    ))
}

pub async fn create_organization(
    state: &AppState,
    payload: CreateOrganizationRequest,
) -> AppResult<ApiResponse<Organization>> {
    payload.validate()?;
    let active = organizations::ActiveModel {
        id: Set(Uuid::new_v4()),
        legal_name: Set(payload.legal_name),
        logo: Set(payload.logo),
        lei_code: Set(payload.lei_code),
    };
    let organization = active.insert(&state.orm).await?;
    tracing::info!(organization_id = %organization.id, "organization created");

    Ok(ApiResponse::success(
        "Organization created",
        Organization::from(organization),
        Some(Meta::empty()),
    ))
}

pub async fn update_organization(
    state: &AppState,
    id: Uuid,
    payload: UpdateOrganizationRequest,
) -> AppResult<ApiResponse<Organization>> {
    payload.validate()?;
    let mut active: organizations::ActiveModel = find(state, id).await?.into();
    if let Some(legal_name) = payload.legal_name {
        active.legal_name = Set(legal_name);
    }
    if let Some(logo) = payload.logo {
        active.logo = Set(logo);
    }
    if let Some(lei_code) = payload.lei_code {
        active.lei_code = Set(lei_code);
    }
    let organization = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        Organization::from(organization),
        Some(Meta::empty()),
    ))
}

/// Refused with a conflict while people, services or offers still point here.
pub async fn delete_organization(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Organizations::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(organization_id = %id, "organization deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_members(
    state: &AppState,
    id: Uuid,
    pagination: Pagination,
) -> AppResult<ApiResponse<PersonList>> {
    find(state, id).await?;
    let finder = Users::find()
        .filter(users::Column::MemberOfId.eq(id))
        .order_by_asc(users::Column::Email);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = PersonList {
        items: items.into_iter().map(Person::from).collect(),
    };
    Ok(ApiResponse::success("Members", data, Some(meta)))
}

pub async fn list_offers_made(
    state: &AppState,
    id: Uuid,
    pagination: Pagination,
) -> AppResult<ApiResponse<OfferList>> {
    find(state, id).await?;
    let finder = Offers::find()
        .filter(offers::Column::OfferedById.eq(id))
        .order_by_desc(offers::Column::CreatedAt);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = OfferList {
        items: items.into_iter().map(Offer::from).collect(),
    };
    Ok(ApiResponse::success("Offers", data, Some(meta)))
}

pub async fn list_services_provided(
    state: &AppState,
    id: Uuid,
    pagination: Pagination,
) -> AppResult<ApiResponse<ServiceList>> {
    find(state, id).await?;
    let finder = Services::find()
        .filter(services::Column::ProviderId.eq(id))
        .order_by_desc(services::Column::CreatedAt);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = ServiceList {
        items: items.into_iter().map(Service::from).collect(),
    };
    Ok(ApiResponse::success("Services", data, Some(meta)))
}

async fn find(state: &AppState, id: Uuid) -> AppResult<organizations::Model> {
    Organizations::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
