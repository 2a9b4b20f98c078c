use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// Product row; specs are stored as JSON text columns
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a002_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub model_name: String,
    pub family_name: String,
    pub main_spec: String,
    pub secondary_spec: String,
    pub rating_value: f64,
    pub rating_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Entry of the `main_spec` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainSpecItem {
    pub item: String,
    pub value: String,
    pub image_icon_url: String,
}

/// Entry of the `secondary_spec` column: a named group of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondarySpecItem {
    pub item: String,
    pub values: Vec<SecondarySpecValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondarySpecValue {
    pub item: String,
    pub value: String,
}

impl Model {
    pub fn main_spec_items(&self) -> anyhow::Result<Vec<MainSpecItem>> {
        serde_json::from_str(&self.main_spec)
            .map_err(|e| anyhow::anyhow!("product {}: bad main_spec: {}", self.id, e))
    }

    pub fn secondary_spec_items(&self) -> anyhow::Result<Vec<SecondarySpecItem>> {
        serde_json::from_str(&self.secondary_spec)
            .map_err(|e| anyhow::anyhow!("product {}: bad secondary_spec: {}", self.id, e))
    }
}

pub async fn get_by_id(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(id.to_string()).one(db).await?)
}

pub async fn insert(db: &DatabaseConnection, product: &Model) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(product.id.clone()),
        title: Set(product.title.clone()),
        model_name: Set(product.model_name.clone()),
        family_name: Set(product.family_name.clone()),
        main_spec: Set(product.main_spec.clone()),
        secondary_spec: Set(product.secondary_spec.clone()),
        rating_value: Set(product.rating_value),
        rating_count: Set(product.rating_count),
    };
    Entity::insert(active).exec(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(main_spec: &str, secondary_spec: &str) -> Model {
        Model {
            id: "p1".into(),
            title: "Galaxy".into(),
            model_name: "A55".into(),
            family_name: "Celulares".into(),
            main_spec: main_spec.into(),
            secondary_spec: secondary_spec.into(),
            rating_value: 4.5,
            rating_count: 10,
        }
    }

    #[test]
    fn test_spec_columns_decode() {
        let p = product(
            r#"[{"item":"Memoria","value":"256 GB","image_icon_url":"m.svg"}]"#,
            r#"[{"item":"Pantalla","values":[{"item":"Tamaño","value":"6.6"}]}]"#,
        );
        let main = p.main_spec_items().unwrap();
        assert_eq!(main[0].item, "Memoria");
        assert_eq!(main[0].image_icon_url, "m.svg");

        let secondary = p.secondary_spec_items().unwrap();
        assert_eq!(secondary[0].values[0].value, "6.6");
    }

    #[test]
    fn test_malformed_spec_is_an_error() {
        let p = product("{not json", "[]");
        let err = p.main_spec_items().unwrap_err();
        assert!(err.to_string().contains("bad main_spec"));
        assert!(p.secondary_spec_items().unwrap().is_empty());
    }
}
