mod common;

use std::collections::HashMap;

use sea_orm::{EntityTrait, Set};
use schema_directory_api::{
    entity::{Offers, Organizations, Services, Users, users},
    fixtures::{
        Factory, LoadMode, OfferFactory, OrganizationFactory, RatingFactory, SeedError, SeedPlan,
        UserFactory, load,
    },
    fixtures::factory::DEFAULT_PASSWORD,
};

use common::{low_cost_hasher, memory_db, seed_context};

#[tokio::test]
async fn random_on_empty_table_is_not_found() {
    let db = memory_db().await;
    let mut ctx = seed_context(1);

    let err = OrganizationFactory::random(&db, &mut ctx)
        .await
        .expect_err("no organizations yet");
    assert!(matches!(err, SeedError::NotFound { entity: "Organization" }), "{err:?}");
}

#[tokio::test]
async fn random_set_larger_than_table_is_insufficient() {
    let db = memory_db().await;
    let mut ctx = seed_context(2);
    OrganizationFactory::create_many(&db, &mut ctx, 2, Default::default())
        .await
        .expect("create organizations");

    let err = OrganizationFactory::random_set(&db, &mut ctx, 3)
        .await
        .expect_err("only two rows");
    assert!(
        matches!(err, SeedError::Insufficient { wanted: 3, available: 2, .. }),
        "{err:?}"
    );

    let picked = OrganizationFactory::random_range(&db, &mut ctx, 1, 2)
        .await
        .expect("pick a range");
    assert!((1..=2).contains(&picked.len()));
}

#[tokio::test]
async fn user_factory_hashes_password_and_grants_default_role() {
    let db = memory_db().await;
    let mut ctx = seed_context(3);

    let user = UserFactory::create_one(&db, &mut ctx, Default::default())
        .await
        .expect("create user");

    assert_ne!(user.password, DEFAULT_PASSWORD);
    assert!(low_cost_hasher().verify(DEFAULT_PASSWORD, &user.password));
    assert!(user.roles().contains(&users::DEFAULT_ROLE.to_string()));
    assert!(user.member_of_id.is_none());
}

#[tokio::test]
async fn overrides_replace_defaults() {
    let db = memory_db().await;
    let mut ctx = seed_context(4);

    let user = UserFactory::create_one(
        &db,
        &mut ctx,
        users::ActiveModel {
            email: Set("jane@example.org".into()),
            gender: Set("female".into()),
            ..Default::default()
        },
    )
    .await
    .expect("create user");

    assert_eq!(user.email, "jane@example.org");
    assert_eq!(user.gender, "female");
    assert!(user.given_name.is_some());
}

#[tokio::test]
async fn factories_create_missing_relations() {
    let db = memory_db().await;
    let mut ctx = seed_context(5);

    let offer = OfferFactory::create_one(&db, &mut ctx, Default::default())
        .await
        .expect("create offer");
    let service = Services::find_by_id(offer.item_offered_id)
        .one(&db)
        .await
        .expect("query service")
        .expect("service was created");
    assert!(service.provider_id.is_some());
    assert_eq!(offer.offered_by_id, service.provider_id);
    assert!(offer.price >= 0);

    let rating = RatingFactory::create_one(&db, &mut ctx, Default::default())
        .await
        .expect("create rating");
    assert!(rating.author_id.is_some());
    assert!((1..=5).contains(&rating.rating_value));
}

#[tokio::test]
async fn offers_are_made_by_the_provider_of_their_service() {
    let db = memory_db().await;
    let mut ctx = seed_context(6);
    let plan = SeedPlan {
        organizations: 5,
        managers: 0,
        admin: None,
        users: 0,
        services: 20,
        offers: 20,
        ratings_per_service: 0..=0,
    };

    load(&db, &mut ctx, &plan, LoadMode::Purge)
        .await
        .expect("load plan");

    let providers: HashMap<_, _> = Services::find()
        .all(&db)
        .await
        .expect("services")
        .into_iter()
        .map(|s| (s.id, s.provider_id))
        .collect();
    let offers = Offers::find().all(&db).await.expect("offers");
    assert_eq!(offers.len(), 20);
    for offer in offers {
        assert_eq!(offer.offered_by_id, providers[&offer.item_offered_id]);
    }
}

#[tokio::test]
async fn default_plan_loads_reference_dataset() {
    let db = memory_db().await;
    let mut ctx = seed_context(7);

    let report = load(&db, &mut ctx, &SeedPlan::default(), LoadMode::Purge)
        .await
        .expect("load fixtures");

    assert_eq!(report.organizations, 5);
    assert_eq!(report.users, 5 + 15 + 1 + 20);
    assert_eq!(report.services, 20);
    assert_eq!(report.offers, 20);
    assert!(report.ratings <= 20 * 10);

    let people = Users::find().all(&db).await.expect("users");
    assert!(
        people
            .iter()
            .all(|u| u.roles().contains(&users::DEFAULT_ROLE.to_string()))
    );
    let admin = people
        .iter()
        .find(|u| u.email == "admin@admin.com")
        .expect("admin account");
    assert!(admin.roles().contains(&"ROLE_ADMIN".to_string()));
    assert!(low_cost_hasher().verify("admin", &admin.password));

    let members = people.iter().filter(|u| u.member_of_id.is_some()).count();
    assert_eq!(members, 20);
}

#[tokio::test]
async fn ratings_are_authored_by_unaffiliated_people() {
    let db = memory_db().await;
    let mut ctx = seed_context(8);
    let plan = SeedPlan {
        ratings_per_service: 1..=2,
        ..SeedPlan::default()
    };
    load(&db, &mut ctx, &plan, LoadMode::Purge)
        .await
        .expect("load fixtures");

    let people: HashMap<_, _> = Users::find()
        .all(&db)
        .await
        .expect("users")
        .into_iter()
        .map(|u| (u.id, u.member_of_id))
        .collect();
    let ratings = schema_directory_api::entity::Ratings::find()
        .all(&db)
        .await
        .expect("ratings");
    assert!(ratings.len() >= 20);
    for rating in ratings {
        let author = rating.author_id.expect("author");
        assert_eq!(people[&author], None);
        assert!(rating.subject_of_id.is_some());
    }
}

#[tokio::test]
async fn reloading_with_purge_keeps_cardinalities() {
    let db = memory_db().await;
    let plan = SeedPlan {
        ratings_per_service: 3..=3,
        ..SeedPlan::default()
    };

    let first = load(&db, &mut seed_context(9), &plan, LoadMode::Purge)
        .await
        .expect("first load");
    let second = load(&db, &mut seed_context(10), &plan, LoadMode::Purge)
        .await
        .expect("second load");

    assert_eq!(first, second);
    assert_eq!(second.ratings, 60);
}

#[tokio::test]
async fn appending_keeps_existing_rows() {
    let db = memory_db().await;
    let plan = SeedPlan {
        organizations: 2,
        managers: 0,
        admin: None,
        users: 1,
        services: 1,
        offers: 1,
        ratings_per_service: 0..=0,
    };

    load(&db, &mut seed_context(11), &plan, LoadMode::Purge)
        .await
        .expect("first load");
    let report = load(&db, &mut seed_context(12), &plan, LoadMode::Append)
        .await
        .expect("append");

    assert_eq!(report.organizations, 4);
    assert_eq!(Organizations::find().all(&db).await.expect("orgs").len(), 4);
}

#[tokio::test]
async fn failed_load_commits_nothing() {
    let db = memory_db().await;
    // Services need providers, so an empty organization table aborts the run.
    let plan = SeedPlan {
        organizations: 0,
        managers: 0,
        admin: None,
        users: 3,
        services: 1,
        offers: 0,
        ratings_per_service: 0..=0,
    };

    let err = load(&db, &mut seed_context(13), &plan, LoadMode::Purge)
        .await
        .expect_err("no organizations");
    assert!(matches!(err, SeedError::NotFound { .. }), "{err:?}");
    assert!(Users::find().all(&db).await.expect("users").is_empty());
}

#[tokio::test]
async fn same_seed_picks_same_rows() {
    async fn picks(seed: u64) -> Vec<uuid::Uuid> {
        let db = memory_db().await;
        let mut ctx = seed_context(seed);
        OrganizationFactory::create_many(&db, &mut ctx, 6, Default::default())
            .await
            .expect("create organizations");
        let mut ids = Vec::new();
        for _ in 0..4 {
            ids.push(
                OrganizationFactory::random(&db, &mut ctx)
                    .await
                    .expect("pick")
                    .id,
            );
        }
        let set = OrganizationFactory::random_set(&db, &mut ctx, 3)
            .await
            .expect("pick set");
        ids.extend(set.into_iter().map(|o| o.id));
        ids
    }

    assert_eq!(picks(21).await, picks(21).await);
}
