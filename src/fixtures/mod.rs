//! Factories and the fixture loader used to seed sample data.

pub mod error;
pub mod factory;
pub mod faker;
pub mod loader;

pub use error::{SeedError, SeedResult};
pub use factory::{
    Factory, OfferFactory, OrganizationFactory, RatingFactory, SeedContext, ServiceFactory,
    UserFactory,
};
pub use faker::Faker;
pub use loader::{LoadMode, SeedPlan, SeedReport, load, purge, seed};
