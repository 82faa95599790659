use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{offers, organizations, ratings, services, users};

/// schema.org/Person. The password hash is never serialized.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Uuid,
    pub email: String,
    pub roles: Vec<String>,
    pub gender: String,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub telephone: Option<String>,
    pub image: Option<String>,
    pub member_of: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// schema.org/Organization
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub legal_name: Option<String>,
    pub logo: Option<String>,
    pub lei_code: Option<String>,
}

/// schema.org/Service
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub provider: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// schema.org/Offer
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: Uuid,
    pub price: i64,
    pub price_currency: Option<String>,
    pub item_offered: Uuid,
    pub offered_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// schema.org/Rating
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    pub rating_value: i16,
    pub rating_explanation: Option<String>,
    pub author: Option<Uuid>,
    pub subject_of: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<users::Model> for Person {
    fn from(model: users::Model) -> Self {
        Person {
            roles: model.roles(),
            id: model.id,
            email: model.email,
            gender: model.gender,
            family_name: model.family_name,
            given_name: model.given_name,
            telephone: model.telephone,
            image: model.image,
            member_of: model.member_of_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<organizations::Model> for Organization {
    fn from(model: organizations::Model) -> Self {
        Organization {
            id: model.id,
            legal_name: model.legal_name,
            logo: model.logo,
            lei_code: model.lei_code,
        }
    }
}

impl From<services::Model> for Service {
    fn from(model: services::Model) -> Self {
        Service {
            id: model.id,
            name: model.name,
            description: model.description,
            provider: model.provider_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<offers::Model> for Offer {
    fn from(model: offers::Model) -> Self {
        Offer {
            id: model.id,
            price: model.price,
            price_currency: model.price_currency,
            item_offered: model.item_offered_id,
            offered_by: model.offered_by_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<ratings::Model> for Rating {
    fn from(model: ratings::Model) -> Self {
        Rating {
            id: model.id,
            rating_value: model.rating_value,
            rating_explanation: model.rating_explanation,
            author: model.author_id,
            subject_of: model.subject_of_id,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn person_hides_password_and_uses_schema_org_names() {
        let now = Utc::now().fixed_offset();
        let model = users::Model {
            id: Uuid::new_v4(),
            email: "jane@example.org".into(),
            password: "$argon2id$v=19$stub".into(),
            roles: json!(["ROLE_ADMIN"]),
            gender: "female".into(),
            family_name: Some("Doe".into()),
            given_name: Some("Jane".into()),
            telephone: None,
            image: None,
            member_of_id: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(Person::from(model)).expect("serialize");

        assert!(value.get("password").is_none());
        assert_eq!(value["familyName"], "Doe");
        assert_eq!(value["givenName"], "Jane");
        assert_eq!(value["roles"], json!(["ROLE_ADMIN", "ROLE_USER"]));
        assert!(value["memberOf"].is_null());
    }
}
