use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A sellable item. `category_id` references a category owned by the
/// category service; there is no local foreign key.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub details: String,

    pub price: f64,

    #[sea_orm(indexed)]
    pub category_id: i32,
}

impl ActiveModelBehavior for ActiveModel {}
