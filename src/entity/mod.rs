pub mod offers;
pub mod organizations;
pub mod ratings;
pub mod services;
pub mod users;

pub use offers::Entity as Offers;
pub use organizations::Entity as Organizations;
pub use ratings::Entity as Ratings;
pub use services::Entity as Services;
pub use users::Entity as Users;
