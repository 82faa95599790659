pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod fixtures;
pub mod migration;
pub mod models;
pub mod password;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::create_api_router;
pub use state::AppState;
