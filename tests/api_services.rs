mod common;

use schema_directory_api::{
    dto::{
        offers::CreateOfferRequest,
        organizations::CreateOrganizationRequest,
        people::{CreatePersonRequest, UpdatePersonRequest},
        ratings::CreateRatingRequest,
        services::{CreateServiceRequest, UpdateServiceRequest},
    },
    error::AppError,
    routes::params::Pagination,
    services::{
        offer_service, organization_service, person_service, rating_service, service_service,
    },
    state::AppState,
};
use uuid::Uuid;

use common::app_state;

fn person(email: &str) -> CreatePersonRequest {
    CreatePersonRequest {
        email: email.to_string(),
        password: "s3cret".to_string(),
        gender: "female".to_string(),
        given_name: Some("Ada".to_string()),
        ..Default::default()
    }
}

async fn organization(state: &AppState) -> Uuid {
    let resp = organization_service::create_organization(
        state,
        CreateOrganizationRequest {
            legal_name: Some("Acme".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("create organization");
    resp.data.expect("organization").id
}

async fn service(state: &AppState, provider: Option<Uuid>) -> Uuid {
    let resp = service_service::create_service(
        state,
        CreateServiceRequest {
            name: "Plumbing".to_string(),
            description: "Pipes fixed fast.".to_string(),
            provider,
        },
    )
    .await
    .expect("create service");
    resp.data.expect("service").id
}

#[tokio::test]
async fn person_password_is_hashed_and_hidden() {
    let state = app_state().await;

    let resp = person_service::create_person(&state, person("ada@example.org"))
        .await
        .expect("create person");
    let created = resp.data.expect("person");
    assert_eq!(created.roles, vec!["ROLE_USER".to_string()]);

    let body = serde_json::to_value(&created).expect("serialize");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let state = app_state().await;
    person_service::create_person(&state, person("dup@example.org"))
        .await
        .expect("first person");

    let err = person_service::create_person(&state, person("dup@example.org"))
        .await
        .expect_err("duplicate");
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");
}

#[tokio::test]
async fn email_cannot_be_taken_over_by_update() {
    let state = app_state().await;
    person_service::create_person(&state, person("first@example.org"))
        .await
        .expect("first");
    let second = person_service::create_person(&state, person("second@example.org"))
        .await
        .expect("second")
        .data
        .expect("person");

    let err = person_service::update_person(
        &state,
        second.id,
        UpdatePersonRequest {
            email: Some("first@example.org".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect_err("taken");
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");

    let updated = person_service::update_person(
        &state,
        second.id,
        UpdatePersonRequest {
            family_name: Some(Some("Lovelace".to_string())),
            ..Default::default()
        },
    )
    .await
    .expect("update")
    .data
    .expect("person");
    assert_eq!(updated.family_name.as_deref(), Some("Lovelace"));
    assert_eq!(updated.email, "second@example.org");
}

#[tokio::test]
async fn membership_requires_existing_organization() {
    let state = app_state().await;
    let mut request = person("member@example.org");
    request.member_of = Some(Uuid::new_v4());

    let err = person_service::create_person(&state, request)
        .await
        .expect_err("unknown organization");
    assert!(matches!(err, AppError::Referential(_)), "{err:?}");
}

#[tokio::test]
async fn service_name_longer_than_fifty_chars_is_rejected() {
    let state = app_state().await;
    let err = service_service::create_service(
        &state,
        CreateServiceRequest {
            name: "x".repeat(51),
            description: "too long".to_string(),
            provider: None,
        },
    )
    .await
    .expect_err("name too long");
    assert!(matches!(err, AppError::Validation(_)), "{err:?}");
}

#[tokio::test]
async fn offer_on_unknown_service_is_referential() {
    let state = app_state().await;
    let err = offer_service::create_offer(
        &state,
        CreateOfferRequest {
            price: 1500,
            price_currency: Some("EUR".to_string()),
            item_offered: Uuid::new_v4(),
            offered_by: None,
        },
    )
    .await
    .expect_err("unknown service");
    assert!(matches!(err, AppError::Referential(_)), "{err:?}");
}

#[tokio::test]
async fn offer_defaults_seller_to_service_provider() {
    let state = app_state().await;
    let provider = organization(&state).await;
    let service_id = service(&state, Some(provider)).await;

    let offer = offer_service::create_offer(
        &state,
        CreateOfferRequest {
            price: 2500,
            price_currency: Some("EUR".to_string()),
            item_offered: service_id,
            offered_by: None,
        },
    )
    .await
    .expect("create offer")
    .data
    .expect("offer");
    assert_eq!(offer.offered_by, Some(provider));

    let made = organization_service::list_offers_made(&state, provider, Pagination::default())
        .await
        .expect("offers made");
    assert_eq!(made.meta.and_then(|m| m.total), Some(1));

    let on_service =
        service_service::list_service_offers(&state, service_id, Pagination::default())
            .await
            .expect("service offers");
    assert_eq!(on_service.data.expect("offers").items.len(), 1);
}

#[tokio::test]
async fn deleting_a_referenced_organization_is_a_conflict() {
    let state = app_state().await;
    let provider = organization(&state).await;
    service(&state, Some(provider)).await;

    let err = organization_service::delete_organization(&state, provider)
        .await
        .expect_err("still referenced");
    assert!(matches!(err, AppError::Conflict(_)), "{err:?}");

    let err = organization_service::delete_organization(&state, Uuid::new_v4())
        .await
        .expect_err("missing");
    assert!(matches!(err, AppError::NotFound), "{err:?}");
}

#[tokio::test]
async fn ratings_are_listed_per_service() {
    let state = app_state().await;
    let service_id = service(&state, None).await;
    let author = person_service::create_person(&state, person("critic@example.org"))
        .await
        .expect("author")
        .data
        .expect("person")
        .id;

    for value in [2, 5] {
        rating_service::create_rating(
            &state,
            CreateRatingRequest {
                rating_value: value,
                rating_explanation: None,
                author: Some(author),
                subject_of: Some(service_id),
            },
        )
        .await
        .expect("create rating");
    }

    let err = rating_service::create_rating(
        &state,
        CreateRatingRequest {
            rating_value: 6,
            ..Default::default()
        },
    )
    .await
    .expect_err("out of range");
    assert!(matches!(err, AppError::Validation(_)), "{err:?}");

    let listed = service_service::list_service_ratings(&state, service_id, Pagination::default())
        .await
        .expect("ratings");
    assert_eq!(listed.data.expect("ratings").items.len(), 2);
}

#[tokio::test]
async fn missing_rows_are_not_found() {
    let state = app_state().await;
    let err = service_service::get_service(&state, Uuid::new_v4())
        .await
        .expect_err("missing");
    assert!(matches!(err, AppError::NotFound));

    let err = person_service::delete_person(&state, Uuid::new_v4())
        .await
        .expect_err("missing");
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn huge_page_number_returns_an_empty_page() {
    let state = app_state().await;
    organization(&state).await;

    let resp = organization_service::list_organizations(
        &state,
        Pagination {
            page: Some(i64::MAX),
            per_page: Some(100),
        },
    )
    .await
    .expect("list organizations");

    assert!(resp.data.expect("organizations").items.is_empty());
    assert_eq!(resp.meta.and_then(|m| m.total), Some(1));
}

#[tokio::test]
async fn explicit_null_clears_membership_and_names() {
    let state = app_state().await;
    let org = organization(&state).await;
    let mut request = person("member@example.org");
    request.member_of = Some(org);
    request.family_name = Some("Lovelace".to_string());
    let created = person_service::create_person(&state, request)
        .await
        .expect("create member")
        .data
        .expect("person");
    assert_eq!(created.member_of, Some(org));

    let payload: UpdatePersonRequest =
        serde_json::from_value(serde_json::json!({ "memberOf": null, "familyName": null }))
            .expect("deserialize update");
    let updated = person_service::update_person(&state, created.id, payload)
        .await
        .expect("update")
        .data
        .expect("person");

    assert_eq!(updated.member_of, None);
    assert_eq!(updated.family_name, None);
    assert_eq!(updated.given_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn explicit_null_detaches_service_provider() {
    let state = app_state().await;
    let provider = organization(&state).await;
    let service_id = service(&state, Some(provider)).await;

    let payload: UpdateServiceRequest =
        serde_json::from_value(serde_json::json!({ "provider": null })).expect("deserialize");
    let updated = service_service::update_service(&state, service_id, payload)
        .await
        .expect("update")
        .data
        .expect("service");
    assert_eq!(updated.provider, None);

    // Now unreferenced, the organization can go.
    organization_service::delete_organization(&state, provider)
        .await
        .expect("delete organization");
}
