use sea_orm::{ActiveValue, ConnectionTrait, EntityTrait, Set};

use super::{Factory, SeedContext, ServiceFactory};
use crate::entity::{offers, services};
use crate::fixtures::error::{SeedError, SeedResult};
use crate::fixtures::faker::Faker;

pub struct OfferFactory;

impl Factory for OfferFactory {
    type Entity = offers::Entity;
    type Model = offers::Model;
    type ActiveModel = offers::ActiveModel;

    const NAME: &'static str = "Offer";

    fn defaults(faker: &mut Faker) -> offers::ActiveModel {
        offers::ActiveModel {
            id: Set(faker.uuid()),
            price: Set(faker.between(1500..20000)),
            price_currency: Set(Some(faker.currency_code())),
            ..Default::default()
        }
    }

    /// A missing item gets a fresh service; a missing seller is that service's provider.
    async fn wire<C: ConnectionTrait>(
        conn: &C,
        ctx: &mut SeedContext,
        mut model: offers::ActiveModel,
    ) -> SeedResult<offers::ActiveModel> {
        let item_offered = match model.item_offered_id {
            ActiveValue::Set(id) | ActiveValue::Unchanged(id) => Some(id),
            ActiveValue::NotSet => None,
        };
        let seller_unset = matches!(model.offered_by_id, ActiveValue::NotSet);

        let service = match item_offered {
            Some(_) if !seller_unset => return Ok(model),
            Some(id) => services::Entity::find_by_id(id)
                .one(conn)
                .await?
                .ok_or(SeedError::NotFound {
                    entity: ServiceFactory::NAME,
                })?,
            None => {
                let service = ServiceFactory::create_one(conn, ctx, Default::default()).await?;
                model.item_offered_id = Set(service.id);
                service
            }
        };

        if seller_unset {
            model.offered_by_id = Set(service.provider_id);
        }
        Ok(model)
    }
}
