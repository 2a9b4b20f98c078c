use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog item as served by `GET /api/v1/items/{id}`.
///
/// The whole aggregate is fetched in one request and is read-only on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub rating_info: RatingInfo,
    /// Kept for wire compatibility; the server always sends `null`.
    #[serde(default)]
    pub rating_distribution: Option<Vec<RatingBucket>>,
    pub description: String,
    pub questions: Vec<Qa>,
    pub seller: Seller,
    pub general_info: GeneralInfo,
    pub images: Vec<ItemImage>,
    pub characteristics_info: CharacteristicsInfo,
    pub payment_info: PaymentInfo,
}

// ============================================================================
// General info
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralInfo {
    pub title: String,
    /// 0..5, may be fractional
    pub rating: f64,
    pub review_count: i32,
    /// Whole currency units, no minor units
    pub price: i64,
    pub status: String,
    pub sold_count: i32,
}

/// Gallery entry; list order is display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemImage {
    pub alt: String,
    pub url_small_version: String,
    pub url_medium_version: String,
}

// ============================================================================
// Ratings and reviews
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingInfo {
    pub overall_rating: f64,
    pub total_ratings: i32,
    pub distribution: Vec<RatingBucket>,
    pub reviews: Vec<Review>,
}

/// One histogram bar of the rating summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    /// 1..5
    pub rating: i32,
    pub count: i32,
    /// 0..100
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: i32,
    pub comment: String,
    /// Display string, never parsed
    pub date: String,
}

// ============================================================================
// Questions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qa {
    pub question: String,
    pub answer: String,
    pub date: String,
}

// ============================================================================
// Seller
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub seller_name: String,
    pub seller_image_url: String,
    pub followers_count: i32,
    pub products_count: i32,
    pub rating: f64,
    pub sales_count: i32,
    pub attention_description: String,
    pub puntuality_description: String,
}

// ============================================================================
// Characteristics
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicsInfo {
    /// Always visible
    pub main_characteristics: Vec<MainCharacteristic>,
    /// Revealed on demand
    pub other_characteristics: Vec<CharacteristicsGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainCharacteristic {
    /// Icon image URL
    pub icon: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicsGroup {
    pub title: String,
    pub characteristics: Vec<CharacteristicItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicItem {
    pub title: String,
    pub value: String,
}

// ============================================================================
// Payment
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub installments: i32,
    pub payment_methods: Vec<PaymentMethod>,
}

/// Payment method group: a title and the logos of the methods in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub title: String,
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "ratingInfo": {
            "overallRating": 4.5,
            "totalRatings": 2,
            "distribution": [{"rating": 5, "count": 1, "percentage": 50.0}],
            "reviews": [{"rating": 5, "comment": "Excelente", "date": "08 Aug 2025"}]
        },
        "ratingDistribution": null,
        "description": "Celular",
        "questions": [{"question": "¿Tiene garantía?", "answer": "Sí", "date": "20 Aug 2025"}],
        "seller": {
            "sellerName": "Link Game",
            "sellerImageUrl": "https://img/seller.png",
            "followersCount": 100,
            "productsCount": 20,
            "rating": 4.2,
            "salesCount": 1000,
            "attentionDescription": "Buena atención",
            "puntualityDescription": "Despacha a tiempo"
        },
        "generalInfo": {
            "title": "Samsung Galaxy A55",
            "rating": 4.5,
            "reviewCount": 2,
            "price": 1299900,
            "status": "Nuevo",
            "soldCount": 10
        },
        "images": [{"alt": "Frente", "urlSmallVersion": "s.webp", "urlMediumVersion": "m.webp"}],
        "characteristicsInfo": {
            "mainCharacteristics": [{"icon": "i.svg", "title": "Memoria", "content": "256 GB"}],
            "otherCharacteristics": [
                {"title": "Pantalla", "characteristics": [{"title": "Tamaño", "value": "6.6\""}]}
            ]
        },
        "paymentInfo": {
            "installments": 12,
            "paymentMethods": [{"title": "credit_card", "images": ["visa.png"]}]
        }
    }"#;

    #[test]
    fn test_decodes_camel_case_payload() {
        let item: Item = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(item.general_info.title, "Samsung Galaxy A55");
        assert_eq!(item.general_info.price, 1_299_900);
        assert_eq!(item.seller.seller_name, "Link Game");
        assert_eq!(item.images[0].url_medium_version, "m.webp");
        assert!(item.rating_distribution.is_none());
        assert_eq!(item.payment_info.payment_methods[0].images, vec!["visa.png"]);
    }

    #[test]
    fn test_missing_rating_distribution_defaults_to_none() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value.as_object_mut().unwrap().remove("ratingDistribution");
        let item: Item = serde_json::from_value(value).unwrap();
        assert!(item.rating_distribution.is_none());
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let item: Item = serde_json::from_str(SAMPLE).unwrap();
        let json = serde_json::to_value(&item).unwrap();
        assert!(json["ratingDistribution"].is_null());
        assert_eq!(json["seller"]["puntualityDescription"], "Despacha a tiempo");
        assert_eq!(json["images"][0]["urlSmallVersion"], "s.webp");
    }
}
