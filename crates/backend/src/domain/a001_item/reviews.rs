use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_item_review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub item_id: String,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Newest first
pub async fn list_by_item(db: &DatabaseConnection, item_id: &str) -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .filter(Column::ItemId.eq(item_id))
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await?)
}

pub async fn insert(db: &DatabaseConnection, review: &Model) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(review.id.clone()),
        item_id: Set(review.item_id.clone()),
        rating: Set(review.rating),
        content: Set(review.content.clone()),
        created_at: Set(review.created_at),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
