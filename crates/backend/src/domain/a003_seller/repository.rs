use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a003_seller")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub number_of_products: i32,
    pub number_of_sales: i32,
    pub number_of_followers: i32,
    pub general_rating: f64,
    pub attention_description: String,
    pub puntuality_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id.to_string()).one(db).await?)
}

pub async fn insert(db: &DatabaseConnection, seller: &Model) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(seller.id.clone()),
        name: Set(seller.name.clone()),
        image_url: Set(seller.image_url.clone()),
        number_of_products: Set(seller.number_of_products),
        number_of_sales: Set(seller.number_of_sales),
        number_of_followers: Set(seller.number_of_followers),
        general_rating: Set(seller.general_rating),
        attention_description: Set(seller.attention_description.clone()),
        puntuality_description: Set(seller.puntuality_description.clone()),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}
