use sea_orm::ConnectionTrait;
use tracing::{info, warn};

use crate::category::{CategoryCheck, CategoryDirectory};
use crate::config::UnknownCategoryPolicy;
use crate::entity::product;
use crate::error::AppError;
use crate::models::product::NewProduct;
use crate::repository::ProductRepository;

/// Result of a gated write that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Inserted(product::Model),
    /// The category was not confirmed and the policy is
    /// [`UnknownCategoryPolicy::Ignore`]; nothing was written.
    Skipped,
}

/// Writes products only after the category service confirms their category.
///
/// The check and the insert are not atomic: a category deleted between the
/// two calls still gets the product.
pub struct ProductCatalog<'a, C: ConnectionTrait> {
    repo: ProductRepository<'a, C>,
    categories: &'a dyn CategoryDirectory,
    policy: UnknownCategoryPolicy,
}

impl<'a, C: ConnectionTrait> ProductCatalog<'a, C> {
    pub fn new(
        conn: &'a C,
        categories: &'a dyn CategoryDirectory,
        policy: UnknownCategoryPolicy,
    ) -> Self {
        Self {
            repo: ProductRepository::new(conn),
            categories,
            policy,
        }
    }

    /// One existence check, then at most one insert. No retry, no
    /// idempotency key: calling twice inserts twice.
    pub async fn add_product(&self, candidate: NewProduct) -> Result<AddOutcome, AppError> {
        let category_id = candidate.category_id;

        match self.categories.check(category_id).await? {
            CategoryCheck::Exists => {
                let model = self.repo.insert(candidate).await?;
                info!(id = model.id, category_id, "Product inserted");
                Ok(AddOutcome::Inserted(model))
            }
            CategoryCheck::Missing { status } => match self.policy {
                UnknownCategoryPolicy::Reject => {
                    warn!(category_id, status, "Category not confirmed, rejecting product");
                    Err(AppError::CategoryNotFound)
                }
                UnknownCategoryPolicy::Ignore => {
                    warn!(category_id, status, "Category not confirmed, skipping insert");
                    Ok(AddOutcome::Skipped)
                }
            },
        }
    }
}
