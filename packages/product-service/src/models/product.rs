use serde::{Deserialize, Serialize};

use crate::entity::product;
use crate::error::AppError;

/// Body of `POST /addProduct`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddProductRequest {
    #[schema(example = "Steel hammer")]
    pub name: String,
    #[schema(example = "Forged steel head, fibreglass handle")]
    pub details: String,
    #[schema(example = 24.99)]
    pub price: f64,
    #[schema(example = 7)]
    pub category_id: i32,
}

/// A product candidate that passed request validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub details: String,
    pub price: f64,
    pub category_id: i32,
}

impl TryFrom<AddProductRequest> for NewProduct {
    type Error = AppError;

    fn try_from(req: AddProductRequest) -> Result<Self, Self::Error> {
        if req.name.trim().is_empty() {
            return Err(AppError::InvalidProduct("The product name must not be empty!"));
        }
        if !req.price.is_finite() || req.price < 0.0 {
            return Err(AppError::InvalidProduct(
                "The product price must be a non-negative number!",
            ));
        }
        Ok(Self {
            name: req.name,
            details: req.details,
            price: req.price,
            category_id: req.category_id,
        })
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Steel hammer")]
    pub name: String,
    #[schema(example = "Forged steel head, fibreglass handle")]
    pub details: String,
    #[schema(example = 24.99)]
    pub price: f64,
    #[schema(example = 7)]
    pub category_id: i32,
}

impl From<product::Model> for ProductResponse {
    fn from(m: product::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            details: m.details,
            price: m.price,
            category_id: m.category_id,
        }
    }
}

/// Single-product envelope. `product` is omitted when an add request was
/// accepted without writing anything.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductResponse>,
    /// Identifier of the responding instance.
    #[schema(example = "product-service-7d9f")]
    pub instance: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProductListEnvelope {
    pub products: Vec<ProductResponse>,
    #[schema(example = "product-service-7d9f")]
    pub instance: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DeleteEnvelope {
    /// Number of rows removed. Zero is still a success.
    #[schema(example = 1)]
    pub deleted: u64,
    #[schema(example = "product-service-7d9f")]
    pub instance: String,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct IdQuery {
    /// Product or category identifier, depending on the route.
    #[param(example = "42")]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct NameQuery {
    /// Exact product name.
    #[param(example = "Steel hammer")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Inclusive lower price bound.
    #[param(example = "10")]
    pub min_price: Option<String>,
    /// Inclusive upper price bound.
    #[param(example = "50")]
    pub max_price: Option<String>,
    /// Substring the product details must contain.
    #[param(example = "steel")]
    pub details: Option<String>,
}

/// Parse an `id` query parameter into a non-negative identifier.
pub fn parse_identifier(raw: Option<&str>) -> Result<i32, AppError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(AppError::IdentifierMissing),
    };
    let id: i32 = raw.parse().map_err(|_| AppError::InvalidNumericFormat)?;
    if id < 0 {
        return Err(AppError::IdentifierNegative);
    }
    Ok(id)
}
