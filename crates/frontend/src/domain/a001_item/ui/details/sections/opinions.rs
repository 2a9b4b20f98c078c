use crate::shared::components::StarRating;
use contracts::domain::a001_item::aggregate::{RatingBucket, RatingInfo, Review};
use leptos::prelude::*;

/// Bar fill for a histogram bucket
pub fn bar_width(percentage: f64) -> String {
    format!("{}%", percentage)
}

#[component]
pub fn Opinions(info: RatingInfo) -> impl IntoView {
    let RatingInfo {
        overall_rating,
        total_ratings,
        distribution,
        reviews,
    } = info;

    view! {
        <div class="opinions">
            <ReviewSummary
                overall_rating=overall_rating
                total_ratings=total_ratings
                distribution=distribution
            />
            <div class="opinions__reviews">
                {reviews
                    .into_iter()
                    .map(|review| view! { <ReviewEntry review=review /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ReviewSummary(
    overall_rating: f64,
    total_ratings: i32,
    distribution: Vec<RatingBucket>,
) -> impl IntoView {
    view! {
        <div class="review-summary">
            <div class="review-summary__overall">
                <span class="review-summary__value">{overall_rating}</span>
                <StarRating rating=overall_rating />
                <span class="review-summary__total">
                    {format!("{} calificaciones", total_ratings)}
                </span>
            </div>
            <div class="review-summary__histogram">
                {distribution
                    .into_iter()
                    .map(|bucket| {
                        view! {
                            <div class="review-summary__row">
                                <div class="review-summary__bar">
                                    <div
                                        class="review-summary__bar-fill"
                                        style:width=bar_width(bucket.percentage)
                                    ></div>
                                </div>
                                <span class="review-summary__label">
                                    {format!("{} ★", bucket.rating)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ReviewEntry(review: Review) -> impl IntoView {
    view! {
        <div class="review">
            <div class="review__header">
                <StarRating rating=f64::from(review.rating) small=true />
                <span class="review__date">{review.date}</span>
            </div>
            <p class="review__comment">{review.comment}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(75.0), "75%");
        assert_eq!(bar_width(33.3), "33.3%");
        assert_eq!(bar_width(0.0), "0%");
    }
}
