use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use super::{ensure_optional, fetch_page};
use crate::{
    dto::people::{CreatePersonRequest, PersonList, UpdatePersonRequest},
    entity::{Organizations, Users, users},
    error::{AppError, AppResult},
    models::Person,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_people(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<PersonList>> {
    let finder = Users::find().order_by_desc(users::Column::CreatedAt);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = PersonList {
        items: items.into_iter().map(Person::from).collect(),
    };
    Ok(ApiResponse::success("People", data, Some(meta)))
}

pub async fn get_person(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Person>> {
    let person = find(state, id).await?;
    Ok(ApiResponse::success("Person", Person::from(person), None))
}

pub async fn create_person(
    state: &AppState,
    payload: CreatePersonRequest,
) -> AppResult<ApiResponse<Person>> {
    payload.validate()?;
    ensure_email_free(state, &payload.email, None).await?;
    ensure_optional::<Organizations>(&state.orm, payload.member_of).await?;

    let password = hash_password(state, &payload.password)?;
    let roles = payload
        .roles
        .unwrap_or_else(|| vec![users::DEFAULT_ROLE.to_string()]);

    let active = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(payload.email),
        password: Set(password),
        roles: Set(json!(roles)),
        gender: Set(payload.gender),
        family_name: Set(payload.family_name),
        given_name: Set(payload.given_name),
        telephone: Set(payload.telephone),
        image: Set(payload.image),
        member_of_id: Set(payload.member_of),
        ..Default::default()
    };
    let person = active.insert(&state.orm).await?;
    tracing::info!(person_id = %person.id, "person created");

    Ok(ApiResponse::success(
        "Person created",
        Person::from(person),
        Some(Meta::empty()),
    ))
}

pub async fn update_person(
    state: &AppState,
    id: Uuid,
    payload: UpdatePersonRequest,
) -> AppResult<ApiResponse<Person>> {
    payload.validate()?;
    let mut active: users::ActiveModel = find(state, id).await?.into();

    if let Some(email) = payload.email {
        ensure_email_free(state, &email, Some(id)).await?;
        active.email = Set(email);
    }
    if let Some(password) = payload.password {
        active.password = Set(hash_password(state, &password)?);
    }
    if let Some(roles) = payload.roles {
        active.roles = Set(json!(roles));
    }
    if let Some(gender) = payload.gender {
        active.gender = Set(gender);
    }
    if let Some(family_name) = payload.family_name {
        active.family_name = Set(family_name);
    }
    if let Some(given_name) = payload.given_name {
        active.given_name = Set(given_name);
    }
    if let Some(telephone) = payload.telephone {
        active.telephone = Set(telephone);
    }
    if let Some(image) = payload.image {
        active.image = Set(image);
    }
    if let Some(member_of) = payload.member_of {
        ensure_optional::<Organizations>(&state.orm, member_of).await?;
        active.member_of_id = Set(member_of);
    }

    let person = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        Person::from(person),
        Some(Meta::empty()),
    ))
}

pub async fn delete_person(state: &AppState, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(person_id = %id, "person deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find(state: &AppState, id: Uuid) -> AppResult<users::Model> {
    Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}

async fn ensure_email_free(state: &AppState, email: &str, owner: Option<Uuid>) -> AppResult<()> {
    let existing = Users::find()
        .filter(users::Column::Email.eq(email))
        .one(&state.orm)
        .await?;
    match existing {
        Some(user) if Some(user.id) != owner => {
            Err(AppError::Conflict("Email is already taken".to_string()))
        }
        _ => Ok(()),
    }
}

fn hash_password(state: &AppState, plain: &str) -> AppResult<String> {
    state
        .hasher
        .hash(plain)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}
