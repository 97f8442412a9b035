//! Request/response DTOs and strict parameter parsing.

use serde::{Deserialize, Serialize};

use sweetshop_auth::{Role, UserRecord};
use sweetshop_catalog::{FilterCriteria, SweetFields};
use sweetshop_core::{Price, UserId};

use crate::app::errors::ApiError;

// -------------------------
// Auth DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisteredResponse {
    pub id: UserId,
    pub email: String,
    pub role: Role,
}

impl From<UserRecord> for RegisteredResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email,
            role: record.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub email: String,
    pub token: String,
}

// -------------------------
// Catalog DTOs
// -------------------------

/// Create/update body: always the complete mutable field set.
#[derive(Debug, Deserialize)]
pub struct SweetRequest {
    pub name: String,
    pub category: String,
    pub price: Price,
    pub quantity: i64,
}

impl SweetRequest {
    pub fn into_fields(self) -> SweetFields {
        SweetFields {
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Search query; numeric bounds arrive as untyped strings and are parsed
/// strictly before any service call.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}

impl SearchParams {
    pub fn into_criteria(self) -> Result<FilterCriteria, ApiError> {
        Ok(FilterCriteria {
            name: non_blank(self.name),
            category: non_blank(self.category),
            min_price: parse_price_bound(self.min_price, "minPrice")?,
            max_price: parse_price_bound(self.max_price, "maxPrice")?,
        })
    }
}

/// Blank parameters count as absent, matching the client's habit of
/// sending empty form fields.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_price_bound(value: Option<String>, param: &str) -> Result<Option<Price>, ApiError> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<Price>()
            .map(Some)
            .map_err(|_| ApiError::BadRequest(format!("{param} must be a non-negative number"))),
    }
}

/// `?quantity=N` for purchase/restock.
#[derive(Debug, Default, Deserialize)]
pub struct QuantityParam {
    pub quantity: Option<String>,
}

impl QuantityParam {
    pub fn parse(&self) -> Result<i64, ApiError> {
        let raw = self
            .quantity
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::BadRequest("quantity query parameter is required".to_string()))?;
        raw.parse::<i64>()
            .map_err(|_| ApiError::BadRequest("quantity must be an integer".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_parse_bounds_and_drop_blanks() {
        let params = SearchParams {
            name: Some("  ".to_string()),
            category: Some(" Candy ".to_string()),
            min_price: Some("1".to_string()),
            max_price: Some("2.50".to_string()),
        };
        let criteria = params.into_criteria().unwrap();
        assert_eq!(criteria.name, None);
        assert_eq!(criteria.category.as_deref(), Some("Candy"));
        assert_eq!(criteria.min_price.unwrap().cents(), 100);
        assert_eq!(criteria.max_price.unwrap().cents(), 250);
    }

    #[test]
    fn search_params_reject_malformed_bounds() {
        let params = SearchParams {
            min_price: Some("cheap".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.into_criteria(),
            Err(ApiError::BadRequest(_))
        ));

        let params = SearchParams {
            max_price: Some("-1".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.into_criteria(),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn quantity_param_requires_a_well_formed_integer() {
        assert_eq!(
            QuantityParam {
                quantity: Some("3".to_string())
            }
            .parse()
            .unwrap(),
            3
        );
        assert!(QuantityParam {
            quantity: Some("three".to_string())
        }
        .parse()
        .is_err());
        assert!(QuantityParam {
            quantity: Some("2.5".to_string())
        }
        .parse()
        .is_err());
        assert!(QuantityParam { quantity: None }.parse().is_err());
    }
}
