use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{offers, organizations, people, ratings, services},
    models::{Offer, Organization, Person, Rating, Service},
    response::{ApiResponse, Meta},
    routes::{
        health, offers as offer_routes, organizations as organization_routes, params,
        people as people_routes, ratings as rating_routes, services as service_routes,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        organization_routes::list_organizations,
        organization_routes::create_organization,
        organization_routes::get_organization,
        organization_routes::update_organization,
        organization_routes::delete_organization,
        organization_routes::list_members,
        organization_routes::list_offers,
        organization_routes::list_services,
        people_routes::list_people,
        people_routes::create_person,
        people_routes::get_person,
        people_routes::update_person,
        people_routes::delete_person,
        service_routes::list_services,
        service_routes::create_service,
        service_routes::get_service,
        service_routes::update_service,
        service_routes::delete_service,
        service_routes::list_offers,
        service_routes::list_ratings,
        offer_routes::list_offers,
        offer_routes::create_offer,
        offer_routes::get_offer,
        offer_routes::update_offer,
        offer_routes::delete_offer,
        rating_routes::list_ratings,
        rating_routes::create_rating,
        rating_routes::get_rating,
        rating_routes::update_rating,
        rating_routes::delete_rating
    ),
    components(
        schemas(
            Person,
            Organization,
            Service,
            Offer,
            Rating,
            people::CreatePersonRequest,
            people::UpdatePersonRequest,
            people::PersonList,
            organizations::CreateOrganizationRequest,
            organizations::UpdateOrganizationRequest,
            organizations::OrganizationList,
            services::CreateServiceRequest,
            services::UpdateServiceRequest,
            services::ServiceList,
            offers::CreateOfferRequest,
            offers::UpdateOfferRequest,
            offers::OfferList,
            ratings::CreateRatingRequest,
            ratings::UpdateRatingRequest,
            ratings::RatingList,
            params::Pagination,
            Meta,
            ApiResponse<Person>,
            ApiResponse<Organization>,
            ApiResponse<Service>,
            ApiResponse<Offer>,
            ApiResponse<Rating>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Organizations", description = "schema.org/Organization endpoints"),
        (name = "People", description = "schema.org/Person endpoints"),
        (name = "Services", description = "schema.org/Service endpoints"),
        (name = "Offers", description = "schema.org/Offer endpoints"),
        (name = "Ratings", description = "schema.org/Rating endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/api/organizations",
            "/api/organizations/{id}/members",
            "/api/people/{id}",
            "/api/services/{id}/ratings",
            "/api/offers",
            "/api/ratings/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
