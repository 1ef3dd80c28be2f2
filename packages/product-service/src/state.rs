use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::category::CategoryDirectory;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub categories: Arc<dyn CategoryDirectory>,
    pub config: AppConfig,
}

impl AppState {
    /// Identifier of this instance, echoed in every response envelope.
    pub fn instance_id(&self) -> &str {
        &self.config.server.instance_id
    }
}
