use sea_orm::{ActiveValue, ConnectionTrait, Set};

use super::{Factory, OrganizationFactory, SeedContext};
use crate::entity::services;
use crate::fixtures::error::SeedResult;
use crate::fixtures::faker::Faker;

pub struct ServiceFactory;

impl Factory for ServiceFactory {
    type Entity = services::Entity;
    type Model = services::Model;
    type ActiveModel = services::ActiveModel;

    const NAME: &'static str = "Service";

    fn defaults(faker: &mut Faker) -> services::ActiveModel {
        services::ActiveModel {
            id: Set(faker.uuid()),
            name: Set(faker.text(services::NAME_MAX_LEN)),
            description: Set(faker.paragraphs(2..5)),
            ..Default::default()
        }
    }

    async fn wire<C: ConnectionTrait>(
        conn: &C,
        ctx: &mut SeedContext,
        mut model: services::ActiveModel,
    ) -> SeedResult<services::ActiveModel> {
        if matches!(model.provider_id, ActiveValue::NotSet) {
            let provider = OrganizationFactory::create_one(conn, ctx, Default::default()).await?;
            model.provider_id = Set(Some(provider.id));
        }
        Ok(model)
    }
}
