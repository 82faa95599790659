use sea_orm::{ActiveValue, Set};
use serde_json::json;

use super::{Factory, SeedContext};
use crate::entity::users;
use crate::fixtures::error::{SeedError, SeedResult};
use crate::fixtures::faker::Faker;

/// Plaintext every generated person logs in with unless overridden.
pub const DEFAULT_PASSWORD: &str = "foo";

const GENDERS: [&str; 2] = ["male", "female"];

pub struct UserFactory;

impl Factory for UserFactory {
    type Entity = users::Entity;
    type Model = users::Model;
    type ActiveModel = users::ActiveModel;

    const NAME: &'static str = "User";

    fn defaults(faker: &mut Faker) -> users::ActiveModel {
        let gender = faker.pick(&GENDERS).copied().unwrap_or("female");
        users::ActiveModel {
            id: Set(faker.uuid()),
            email: Set(faker.unique_safe_email()),
            password: Set(DEFAULT_PASSWORD.to_string()),
            roles: Set(json!([users::DEFAULT_ROLE])),
            gender: Set(gender.to_string()),
            family_name: Set(Some(faker.last_name())),
            given_name: Set(Some(faker.first_name())),
            telephone: Set(Some(faker.phone_number())),
            image: Set(Some(faker.image_url(360, 360))),
            member_of_id: Set(None),
            ..Default::default()
        }
    }

    /// The password attribute holds plaintext until here; only its hash is stored.
    fn after_instantiate(
        ctx: &mut SeedContext,
        mut model: users::ActiveModel,
    ) -> SeedResult<users::ActiveModel> {
        if let ActiveValue::Set(plain) = &model.password {
            let hashed = ctx
                .hasher
                .hash(plain)
                .map_err(|e| SeedError::PasswordHash(e.to_string()))?;
            model.password = Set(hashed);
        }
        Ok(model)
    }
}
