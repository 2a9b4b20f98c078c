use sea_orm::entity::prelude::*;
use sea_orm::Set;

use super::{images, questions, reviews};
use crate::domain::a002_product::{payment_methods, repository as products};
use crate::domain::a003_seller::repository as sellers;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub product_status: String,
    pub price: i64,
    pub available_quantity: i32,
    pub sold_count: i32,
    pub product_id: String,
    pub seller_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Item row with everything the detail page needs
#[derive(Debug, Clone)]
pub struct EnrichedItem {
    pub item: Model,
    pub product: products::Model,
    pub seller: sellers::Model,
    pub payment_methods: Vec<payment_methods::Model>,
    pub images: Vec<images::Model>,
    pub reviews: Vec<reviews::Model>,
    pub questions: Vec<questions::Model>,
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id.to_string()).one(db).await?)
}

/// Load an item with its product, seller and child rows.
///
/// `Ok(None)` when the item does not exist. A dangling product or seller
/// reference is an error.
pub async fn get_enriched(
    db: &DatabaseConnection,
    id: &str,
) -> anyhow::Result<Option<EnrichedItem>> {
    let Some(item) = get_by_id(db, id).await? else {
        tracing::debug!("Item {} not found", id);
        return Ok(None);
    };

    let product = products::get_by_id(db, &item.product_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("item {}: product {} missing", id, item.product_id))?;
    let seller = sellers::get_by_id(db, &item.seller_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("item {}: seller {} missing", id, item.seller_id))?;

    let payment_methods = payment_methods::list_by_product(db, &product.id).await?;
    let images = images::list_by_item(db, id).await?;
    let reviews = reviews::list_by_item(db, id).await?;
    let questions = questions::list_by_item(db, id).await?;

    Ok(Some(EnrichedItem {
        item,
        product,
        seller,
        payment_methods,
        images,
        reviews,
        questions,
    }))
}

pub async fn insert(db: &DatabaseConnection, item: &Model) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(item.id.clone()),
        title: Set(item.title.clone()),
        description: Set(item.description.clone()),
        product_status: Set(item.product_status.clone()),
        price: Set(item.price),
        available_quantity: Set(item.available_quantity),
        sold_count: Set(item.sold_count),
        product_id: Set(item.product_id.clone()),
        seller_id: Set(item.seller_id.clone()),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
