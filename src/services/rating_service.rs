use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use uuid::Uuid;
use validator::Validate;

use super::{ensure_optional, fetch_page};
use crate::{
    dto::ratings::{CreateRatingRequest, RatingList, UpdateRatingRequest},
    entity::{Ratings, Services, Users, ratings},
    error::{AppError, AppResult},
    models::Rating,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_ratings(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<RatingList>> {
    let finder = Ratings::find().order_by_desc(ratings::Column::CreatedAt);
    let (items, meta) = fetch_page(&state.orm, finder, pagination).await?;
    let data = RatingList {
        items: items.into_iter().map(Rating::from).collect(),
    };
    Ok(ApiResponse::success("Ratings", data, Some(meta)))
}

pub async fn get_rating(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Rating>> {
    let rating = find(state, id).await?;
    Ok(ApiResponse::success("Rating", Rating::from(rating), None))
}

pub async fn create_rating(
    state: &AppState,
    payload: CreateRatingRequest,
) -> AppResult<ApiResponse<Rating>> {
    payload.validate()?;
    ensure_optional::<Users>(&state.orm, payload.author).await?;
    ensure_optional::<Services>(&state.orm, payload.subject_of).await?;

    let active = ratings::ActiveModel {
        id: Set(Uuid::new_v4()),
        rating_value: Set(payload.rating_value),
        rating_explanation: Set(payload.rating_explanation),
        author_id: Set(payload.author),
        subject_of_id: Set(payload.subject_of),
        ..Default::default()
    };
    let rating = active.insert(&state.orm).await?;
    tracing::info!(rating_id = %rating.id, "rating created");

    Ok(ApiResponse::success(
        "Rating created",
        Rating::from(rating),
        Some(Meta::empty()),
    ))
}

pub async fn update_rating(
    state: &AppState,
    id: Uuid,
    payload: UpdateRatingRequest,
) -> AppResult<ApiResponse<Rating>> {
    payload.validate()?;
    let mut active: ratings::ActiveModel = find(state, id).await?.into();
    if let Some(rating_value) = payload.rating_value {
        active.rating_value = Set(rating_value);
    }
    if let Some(rating_explanation) = payload.rating_explanation {
        active.rating_explanation = Set(rating_explanation);
    }
    if let Some(author) = payload.author {
        ensure_optional::<Users>(&state.orm, author).await?;
        active.author_id = Set(author);
    }
    if let Some(subject_of) = payload.subject_of {
        ensure_optional::<Services>(&state.orm, subject_of).await?;
        active.subject_of_id = Set(subject_of);
    }
    let rating = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Updated",
        Rating::from(rating),
        Some(Meta::empty()),
    ))
}

pub async fn delete_rating(
    state: &AppState,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Ratings::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(rating_id = %id, "rating deleted");

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find(state: &AppState, id: Uuid) -> AppResult<ratings::Model> {
    Ratings::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)
}
