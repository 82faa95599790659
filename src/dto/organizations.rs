use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Organization;

#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    pub legal_name: Option<String>,
    #[validate(url(message = "logo must be a URL"))]
    pub logo: Option<String>,
    #[validate(length(max = 20, message = "leiCode is at most 20 characters"))]
    pub lei_code: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationRequest {
    /// `null` clears the stored value; an absent field leaves it unchanged.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub legal_name: Option<Option<String>>,
    #[validate(url(message = "logo must be a URL"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub logo: Option<Option<String>>,
    #[validate(length(max = 20, message = "leiCode is at most 20 characters"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub lei_code: Option<Option<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrganizationList {
    pub items: Vec<Organization>,
}
