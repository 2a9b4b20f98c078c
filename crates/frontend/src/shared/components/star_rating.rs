use crate::shared::rating::star_slots;
use leptos::prelude::*;

/// Five stars, filled per [`star_slots`]
#[component]
pub fn StarRating(rating: f64, #[prop(optional)] small: bool) -> impl IntoView {
    let class = if small { "stars stars--small" } else { "stars" };
    view! {
        <span class=class>
            {star_slots(rating)
                .into_iter()
                .map(|filled| {
                    let class = if filled { "star star--filled" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </span>
    }
}
