use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod offers;
pub mod organizations;
pub mod params;
pub mod people;
pub mod ratings;
pub mod services;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/organizations", organizations::router())
        .nest("/people", people::router())
        .nest("/services", services::router())
        .nest("/offers", offers::router())
        .nest("/ratings", ratings::router())
}
