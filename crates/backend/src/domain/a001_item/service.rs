use super::repository::{self, EnrichedItem};
use super::reviews;
use crate::domain::a002_product::payment_methods;
use crate::shared::format::format_display_date;
use contracts::domain::a001_item::aggregate::{
    CharacteristicItem, CharacteristicsGroup, CharacteristicsInfo, GeneralInfo, Item, ItemImage,
    MainCharacteristic, PaymentInfo, PaymentMethod, Qa, RatingBucket, RatingInfo, Review, Seller,
};
use sea_orm::DatabaseConnection;

/// Item with all nested data, in API shape
pub async fn get_enriched(db: &DatabaseConnection, id: &str) -> anyhow::Result<Option<Item>> {
    match repository::get_enriched(db, id).await? {
        Some(enriched) => Ok(Some(to_contract(&enriched)?)),
        None => Ok(None),
    }
}

/// Map stored rows onto the wire aggregate
pub fn to_contract(e: &EnrichedItem) -> anyhow::Result<Item> {
    let product = &e.product;
    let seller = &e.seller;

    let main_characteristics = product
        .main_spec_items()?
        .into_iter()
        .map(|spec| MainCharacteristic {
            icon: spec.image_icon_url,
            title: spec.item,
            content: spec.value,
        })
        .collect();

    let other_characteristics = product
        .secondary_spec_items()?
        .into_iter()
        .map(|group| CharacteristicsGroup {
            title: group.item,
            characteristics: group
                .values
                .into_iter()
                .map(|v| CharacteristicItem {
                    title: v.item,
                    value: v.value,
                })
                .collect(),
        })
        .collect();

    Ok(Item {
        rating_info: RatingInfo {
            overall_rating: product.rating_value,
            total_ratings: product.rating_count,
            distribution: rating_distribution(&e.reviews),
            reviews: e
                .reviews
                .iter()
                .map(|r| Review {
                    rating: r.rating,
                    comment: r.content.clone(),
                    date: format_display_date(&r.created_at),
                })
                .collect(),
        },
        rating_distribution: None,
        description: e.item.description.clone(),
        questions: e
            .questions
            .iter()
            .map(|q| Qa {
                question: q.question.clone(),
                answer: q.answer.clone(),
                date: format_display_date(&q.created_at),
            })
            .collect(),
        seller: Seller {
            seller_name: seller.name.clone(),
            seller_image_url: seller.image_url.clone(),
            followers_count: seller.number_of_followers,
            products_count: seller.number_of_products,
            rating: seller.general_rating,
            sales_count: seller.number_of_sales,
            attention_description: seller.attention_description.clone(),
            puntuality_description: seller.puntuality_description.clone(),
        },
        general_info: GeneralInfo {
            title: e.item.title.clone(),
            rating: product.rating_value,
            review_count: product.rating_count,
            price: e.item.price,
            status: e.item.product_status.clone(),
            sold_count: e.item.sold_count,
        },
        images: e
            .images
            .iter()
            .map(|img| ItemImage {
                alt: img.alt.clone(),
                url_small_version: img.url_small_version.clone(),
                url_medium_version: img.url_medium_version.clone(),
            })
            .collect(),
        characteristics_info: CharacteristicsInfo {
            main_characteristics,
            other_characteristics,
        },
        payment_info: PaymentInfo {
            installments: max_installments(&e.payment_methods),
            payment_methods: group_payment_methods(&e.payment_methods),
        },
    })
}

/// One bucket per rating present in `reviews`, highest rating first.
///
/// Percentages are rounded to one decimal.
pub fn rating_distribution(reviews: &[reviews::Model]) -> Vec<RatingBucket> {
    let total = reviews.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: Vec<(i32, i32)> = Vec::new();
    for review in reviews {
        match counts.iter_mut().find(|(rating, _)| *rating == review.rating) {
            Some((_, count)) => *count += 1,
            None => counts.push((review.rating, 1)),
        }
    }
    counts.sort_by(|a, b| b.0.cmp(&a.0));

    counts
        .into_iter()
        .map(|(rating, count)| {
            let percentage = (count as f64 * 1000.0 / total as f64).round() / 10.0;
            RatingBucket {
                rating,
                count,
                percentage,
            }
        })
        .collect()
}

/// Best installment offer across all methods, 0 when there are none
pub fn max_installments(methods: &[payment_methods::Model]) -> i32 {
    methods
        .iter()
        .map(|m| m.installments)
        .max()
        .unwrap_or(0)
        .max(0)
}

/// Group methods by type, keeping the order in which each type first appears
pub fn group_payment_methods(methods: &[payment_methods::Model]) -> Vec<PaymentMethod> {
    let mut groups: Vec<PaymentMethod> = Vec::new();
    for method in methods {
        match groups.iter_mut().find(|g| g.title == method.method_type) {
            Some(group) => group.images.push(method.image_url.clone()),
            None => groups.push(PaymentMethod {
                title: method.method_type.clone(),
                images: vec![method.image_url.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::{db, seed};
    use chrono::{TimeZone, Utc};

    fn review(rating: i32) -> reviews::Model {
        reviews::Model {
            id: format!("r{}", rating),
            item_id: "i".into(),
            rating,
            content: String::new(),
            created_at: Utc.with_ymd_and_hms(2025, 8, 8, 0, 0, 0).unwrap(),
        }
    }

    fn method(method_type: &str, installments: i32, image: &str) -> payment_methods::Model {
        payment_methods::Model {
            id: image.into(),
            product_id: "p".into(),
            position: 0,
            method_type: method_type.into(),
            installments,
            interest_rate_percentage: 0.0,
            image_url: image.into(),
        }
    }

    #[test]
    fn test_rating_distribution() {
        let reviews = vec![review(5), review(4), review(5), review(5)];
        let buckets = rating_distribution(&reviews);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].rating, 5);
        assert_eq!(buckets[0].count, 3);
        assert_eq!(buckets[0].percentage, 75.0);
        assert_eq!(buckets[1].rating, 4);
        assert_eq!(buckets[1].percentage, 25.0);
    }

    #[test]
    fn test_rating_distribution_rounds_to_one_decimal() {
        let reviews = vec![review(1), review(2), review(3)];
        let buckets = rating_distribution(&reviews);
        assert_eq!(buckets.iter().map(|b| b.rating).collect::<Vec<_>>(), vec![3, 2, 1]);
        assert!(buckets.iter().all(|b| b.percentage == 33.3));
    }

    #[test]
    fn test_rating_distribution_empty() {
        assert!(rating_distribution(&[]).is_empty());
    }

    #[test]
    fn test_payment_grouping_keeps_first_seen_order() {
        let methods = vec![
            method("Tarjetas de crédito", 12, "visa.png"),
            method("Efectivo", 0, "efecty.png"),
            method("Tarjetas de crédito", 36, "master.png"),
        ];
        let groups = group_payment_methods(&methods);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, "Tarjetas de crédito");
        assert_eq!(groups[0].images, vec!["visa.png", "master.png"]);
        assert_eq!(groups[1].title, "Efectivo");
        assert_eq!(max_installments(&methods), 36);
    }

    #[test]
    fn test_max_installments_without_methods() {
        assert_eq!(max_installments(&[]), 0);
    }

    #[tokio::test]
    async fn test_get_enriched_demo_item() {
        let conn = db::connect_in_memory().await.unwrap();
        seed::ensure_demo_item(&conn).await.unwrap();

        let item = get_enriched(&conn, seed::DEMO_ITEM_ID)
            .await
            .unwrap()
            .expect("demo item");

        assert_eq!(item.general_info.title, seed::DEMO_ITEM_TITLE);
        assert_eq!(item.general_info.price, seed::DEMO_ITEM_PRICE);
        assert!(item.rating_distribution.is_none());
        assert!(!item.images.is_empty());
        assert_eq!(item.images[0].alt, "Vista frontal");
        assert!(!item.characteristics_info.main_characteristics.is_empty());
        let bucketed: i32 = item.rating_info.distribution.iter().map(|b| b.count).sum();
        assert_eq!(item.rating_info.reviews.len(), bucketed as usize);
        assert!(item.payment_info.installments > 0);
    }

    #[tokio::test]
    async fn test_get_enriched_unknown_item() {
        let conn = db::connect_in_memory().await.unwrap();
        seed::ensure_demo_item(&conn).await.unwrap();
        assert!(get_enriched(&conn, "missing").await.unwrap().is_none());
    }
}
