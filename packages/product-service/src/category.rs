//! Client side of the category service.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::CategoryServiceConfig;

/// Answer of a category existence check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryCheck {
    Exists,
    /// The category service answered with a non-success status.
    Missing { status: u16 },
}

#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("category service unreachable: {0}")]
    Unreachable(String),
}

/// Registry of categories owned by another service.
#[async_trait]
pub trait CategoryDirectory: Send + Sync {
    /// Ask whether a category exists. Issues exactly one request, no retry.
    async fn check(&self, category_id: i32) -> Result<CategoryCheck, CategoryError>;
}

/// [`CategoryDirectory`] backed by `GET {base_url}/getCategory?id=`.
pub struct HttpCategoryDirectory {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCategoryDirectory {
    pub fn new(config: &CategoryServiceConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: format!("{}/getCategory", config.base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl CategoryDirectory for HttpCategoryDirectory {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn check(&self, category_id: i32) -> Result<CategoryCheck, CategoryError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("id", category_id)])
            .send()
            .await
            .map_err(|e| CategoryError::Unreachable(e.to_string()))?;

        let status = resp.status();
        debug!(%status, "Category check answered");

        if status.is_success() {
            Ok(CategoryCheck::Exists)
        } else {
            Ok(CategoryCheck::Missing {
                status: status.as_u16(),
            })
        }
    }
}
