use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Person;

#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    #[validate(email(message = "email is not a valid address"), length(max = 180))]
    pub email: String,
    #[validate(length(min = 1, message = "password cannot be empty"))]
    pub password: String,
    pub roles: Option<Vec<String>>,
    #[validate(length(min = 1, message = "gender cannot be empty"))]
    pub gender: String,
    pub family_name: Option<String>,
    pub given_name: Option<String>,
    pub telephone: Option<String>,
    #[validate(url(message = "image must be a URL"))]
    pub image: Option<String>,
    pub member_of: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonRequest {
    #[validate(email(message = "email is not a valid address"), length(max = 180))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "password cannot be empty"))]
    pub password: Option<String>,
    pub roles: Option<Vec<String>>,
    #[validate(length(min = 1, message = "gender cannot be empty"))]
    pub gender: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub family_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub given_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub telephone: Option<Option<String>>,
    #[validate(url(message = "image must be a URL"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub image: Option<Option<String>>,
    /// `null` removes the membership.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub member_of: Option<Option<Uuid>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonList {
    pub items: Vec<Person>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_absent_fields_differ() {
        let update: UpdatePersonRequest =
            serde_json::from_value(json!({ "memberOf": null })).expect("deserialize");
        assert_eq!(update.member_of, Some(None));
        assert_eq!(update.family_name, None);

        let id = Uuid::new_v4();
        let update: UpdatePersonRequest =
            serde_json::from_value(json!({ "memberOf": id, "image": "not a url" }))
                .expect("deserialize");
        assert_eq!(update.member_of, Some(Some(id)));
        assert!(update.validate().is_err());
    }
}
