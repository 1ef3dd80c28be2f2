//! Compiles optional search filters into a parameterized product predicate.

use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, Condition};
use thiserror::Error;

use crate::entity::product;
use crate::models::shared::escape_like;

pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("no search filter provided")]
    NoFilterProvided,
    #[error("{field} is not a valid number: {raw:?}")]
    InvalidNumericFormat { field: &'static str, raw: String },
    #[error("{field} must not be negative, got {value}")]
    NegativeValueRejected { field: &'static str, value: f64 },
}

/// A single validated filter. Every value is bound as a query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    MinPrice(f64),
    MaxPrice(f64),
    DetailsContains(String),
}

/// Validated search criteria, in the order min-price, max-price, description.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    predicates: Vec<Predicate>,
}

impl SearchCriteria {
    /// Validate raw filter values.
    ///
    /// A price that is present but empty is still parsed (and rejected); an
    /// empty description counts as absent. When nothing usable is provided at
    /// all the result is [`CriteriaError::NoFilterProvided`], and the caller
    /// decides what that means.
    pub fn compile(
        min_price: Option<&str>,
        max_price: Option<&str>,
        details: Option<&str>,
    ) -> Result<Self, CriteriaError> {
        let details = details.filter(|d| !d.is_empty());
        let blank = |v: Option<&str>| v.is_none_or(str::is_empty);

        if blank(min_price) && blank(max_price) && details.is_none() {
            return Err(CriteriaError::NoFilterProvided);
        }

        let mut predicates = Vec::with_capacity(3);
        if let Some(raw) = min_price {
            predicates.push(Predicate::MinPrice(parse_price(MIN_PRICE, raw)?));
        }
        if let Some(raw) = max_price {
            predicates.push(Predicate::MaxPrice(parse_price(MAX_PRICE, raw)?));
        }
        if let Some(term) = details {
            predicates.push(Predicate::DetailsContains(term.to_owned()));
        }

        Ok(Self { predicates })
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Conjunction of all predicates, ready for `QueryFilter::filter`.
    pub fn condition(&self) -> Condition {
        self.predicates
            .iter()
            .fold(Condition::all(), |cond, p| match p {
                Predicate::MinPrice(v) => cond.add(product::Column::Price.gte(*v)),
                Predicate::MaxPrice(v) => cond.add(product::Column::Price.lte(*v)),
                Predicate::DetailsContains(term) => cond.add(
                    product::Column::Details
                        .like(LikeExpr::new(format!("%{}%", escape_like(term))).escape('\\')),
                ),
            })
    }
}

fn parse_price(field: &'static str, raw: &str) -> Result<f64, CriteriaError> {
    let value = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CriteriaError::InvalidNumericFormat {
            field,
            raw: raw.to_owned(),
        })?;

    if value < 0.0 {
        return Err(CriteriaError::NegativeValueRejected { field, value });
    }
    Ok(value)
}
