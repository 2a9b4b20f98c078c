use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_payment_method")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub product_id: String,
    pub position: i32,
    /// Group key shown as the payment group title
    pub method_type: String,
    pub installments: i32,
    pub interest_rate_percentage: f64,
    pub image_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list_by_product(
    db: &DatabaseConnection,
    product_id: &str,
) -> anyhow::Result<Vec<Model>> {
    Ok(Entity::find()
        .filter(Column::ProductId.eq(product_id))
        .order_by_asc(Column::Position)
        .all(db)
        .await?)
}

pub async fn insert(db: &DatabaseConnection, method: &Model) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(method.id.clone()),
        product_id: Set(method.product_id.clone()),
        position: Set(method.position),
        method_type: Set(method.method_type.clone()),
        installments: Set(method.installments),
        interest_rate_percentage: Set(method.interest_rate_percentage),
        image_url: Set(method.image_url.clone()),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
