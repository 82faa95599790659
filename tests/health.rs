mod common;

use axum::extract::State;
use schema_directory_api::routes::health::health_check;

use common::app_state;

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check(State(app_state().await)).await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.as_ref().expect("health data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.database, "up");

    let body = serde_json::to_value(&response.0).expect("serialize");
    assert_eq!(body["data"]["status"], "ok");
}
