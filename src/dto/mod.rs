pub mod offers;
pub mod organizations;
pub mod people;
pub mod ratings;
pub mod services;
