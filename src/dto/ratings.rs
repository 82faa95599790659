use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Rating;

#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRatingRequest {
    #[validate(range(min = 1, max = 5, message = "ratingValue must be between 1 and 5"))]
    pub rating_value: i16,
    pub rating_explanation: Option<String>,
    pub author: Option<Uuid>,
    pub subject_of: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRatingRequest {
    #[validate(range(min = 1, max = 5, message = "ratingValue must be between 1 and 5"))]
    pub rating_value: Option<i16>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub rating_explanation: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub author: Option<Option<Uuid>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub subject_of: Option<Option<Uuid>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RatingList {
    pub items: Vec<Rating>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_value_is_bounded() {
        for (value, ok) in [(0, false), (1, true), (5, true), (6, false)] {
            let request = CreateRatingRequest {
                rating_value: value,
                ..Default::default()
            };
            assert_eq!(request.validate().is_ok(), ok, "rating {value}");
        }
    }
}
