use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::Offer;

#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    /// Minor currency units.
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price: i64,
    #[validate(custom(function = "validate_currency"))]
    pub price_currency: Option<String>,
    pub item_offered: Uuid,
    /// Defaults to the provider of `itemOffered`.
    pub offered_by: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferRequest {
    #[validate(range(min = 0, message = "price cannot be negative"))]
    pub price: Option<i64>,
    #[validate(custom(function = "validate_currency"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub price_currency: Option<Option<String>>,
    pub item_offered: Option<Uuid>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub offered_by: Option<Option<Uuid>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OfferList {
    pub items: Vec<Offer>,
}

/// ISO 4217 code ("EUR") or a ticker symbol ("BTC"): 3 to 10 uppercase letters or digits.
pub fn validate_currency(code: &str) -> Result<(), ValidationError> {
    let well_formed = (3..=10).contains(&code.len())
        && code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if well_formed {
        Ok(())
    } else {
        let mut err = ValidationError::new("currency");
        err.message = Some("priceCurrency must be an ISO 4217 or ticker code".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_codes() {
        assert!(validate_currency("EUR").is_ok());
        assert!(validate_currency("USDT").is_ok());
        assert!(validate_currency("eur").is_err());
        assert!(validate_currency("$").is_err());
        assert!(validate_currency("TOOLONGCODE1").is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let request = CreateOfferRequest {
            price: -1,
            price_currency: Some("EUR".into()),
            item_offered: Uuid::new_v4(),
            offered_by: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn zero_price_is_allowed() {
        let request = CreateOfferRequest {
            price: 0,
            price_currency: None,
            item_offered: Uuid::new_v4(),
            offered_by: None,
        };
        assert!(request.validate().is_ok());
    }
}
