use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_item_image")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub item_id: String,
    /// Gallery order
    pub position: i32,
    pub alt: String,
    pub url_small_version: String,
    pub url_medium_version: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list_by_item(db: &DatabaseConnection, item_id: &str) -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .filter(Column::ItemId.eq(item_id))
        .order_by_asc(Column::Position)
        .all(db)
        .await?)
}

pub async fn insert(db: &DatabaseConnection, image: &Model) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(image.id.clone()),
        item_id: Set(image.item_id.clone()),
        position: Set(image.position),
        alt: Set(image.alt.clone()),
        url_small_version: Set(image.url_small_version.clone()),
        url_medium_version: Set(image.url_medium_version.clone()),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
