use sea_orm::Set;

use super::Factory;
use crate::entity::organizations;
use crate::fixtures::faker::Faker;

pub struct OrganizationFactory;

impl Factory for OrganizationFactory {
    type Entity = organizations::Entity;
    type Model = organizations::Model;
    type ActiveModel = organizations::ActiveModel;

    const NAME: &'static str = "Organization";

    fn defaults(faker: &mut Faker) -> organizations::ActiveModel {
        organizations::ActiveModel {
            id: Set(faker.uuid()),
            legal_name: Set(Some(faker.company_name())),
            logo: Set(Some(faker.image_url(640, 480))),
            lei_code: Set(Some(faker.lei_code())),
        }
    }
}
