use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
    Select, Set,
};

use crate::entity::product;
use crate::models::product::NewProduct;
use crate::search::SearchCriteria;

/// Window over an enumeration. [`Page::ALL`] returns every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: Option<u64>,
}

impl Page {
    pub const ALL: Page = Page {
        offset: 0,
        limit: None,
    };

    fn apply(self, select: Select<product::Entity>) -> Select<product::Entity> {
        if self == Page::ALL {
            return select;
        }
        select.offset(Some(self.offset)).limit(self.limit)
    }
}

/// Storage operations on the `product` table.
pub struct ProductRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, new: NewProduct) -> Result<product::Model, DbErr> {
        product::ActiveModel {
            name: Set(new.name),
            details: Set(new.details),
            price: Set(new.price),
            category_id: Set(new.category_id),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// `None` means no product has this identifier.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, DbErr> {
        product::Entity::find_by_id(id).one(self.conn).await
    }

    /// Exact name match. Names are not unique.
    pub async fn find_by_name(&self, name: &str, page: Page) -> Result<Vec<product::Model>, DbErr> {
        page.apply(product::Entity::find().filter(product::Column::Name.eq(name)))
            .all(self.conn)
            .await
    }

    pub async fn find_all(&self, page: Page) -> Result<Vec<product::Model>, DbErr> {
        page.apply(product::Entity::find()).all(self.conn).await
    }

    pub async fn find_by_criteria(
        &self,
        criteria: &SearchCriteria,
        page: Page,
    ) -> Result<Vec<product::Model>, DbErr> {
        page.apply(product::Entity::find().filter(criteria.condition()))
            .all(self.conn)
            .await
    }

    /// Returns the number of deleted rows; deleting a missing id is not an error.
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, DbErr> {
        let res = product::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_by_category(&self, category_id: i32) -> Result<u64, DbErr> {
        let res = product::Entity::delete_many()
            .filter(product::Column::CategoryId.eq(category_id))
            .exec(self.conn)
            .await?;
        Ok(res.rows_affected)
    }
}
