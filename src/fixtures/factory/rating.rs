use sea_orm::{ActiveValue, ConnectionTrait, Set};

use super::{Factory, SeedContext, UserFactory};
use crate::entity::ratings;
use crate::fixtures::error::SeedResult;
use crate::fixtures::faker::Faker;

pub struct RatingFactory;

impl Factory for RatingFactory {
    type Entity = ratings::Entity;
    type Model = ratings::Model;
    type ActiveModel = ratings::ActiveModel;

    const NAME: &'static str = "Rating";

    fn defaults(faker: &mut Faker) -> ratings::ActiveModel {
        let explanation = if faker.boolean(70) {
            Some(faker.paragraphs(1..4))
        } else {
            None
        };
        ratings::ActiveModel {
            id: Set(faker.uuid()),
            rating_value: Set(faker.between(ratings::MIN_RATING..=ratings::MAX_RATING)),
            rating_explanation: Set(explanation),
            subject_of_id: Set(None),
            ..Default::default()
        }
    }

    async fn wire<C: ConnectionTrait>(
        conn: &C,
        ctx: &mut SeedContext,
        mut model: ratings::ActiveModel,
    ) -> SeedResult<ratings::ActiveModel> {
        if matches!(model.author_id, ActiveValue::NotSet) {
            let author = UserFactory::create_one(conn, ctx, Default::default()).await?;
            model.author_id = Set(Some(author.id));
        }
        Ok(model)
    }
}
