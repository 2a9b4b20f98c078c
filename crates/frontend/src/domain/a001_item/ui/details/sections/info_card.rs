use crate::shared::components::StarRating;
use crate::shared::format::format_price;
use contracts::domain::a001_item::aggregate::GeneralInfo;
use leptos::prelude::*;
use thaw::*;

/// Title, rating, price and the local cart/favorite controls
#[component]
pub fn InfoCard(info: GeneralInfo) -> impl IntoView {
    let favorite = RwSignal::new(false);
    let cart_count = RwSignal::new(0u32);

    let GeneralInfo {
        title,
        rating,
        review_count,
        price,
        status,
        sold_count,
    } = info;

    view! {
        <div class="info-card">
            <div class="info-card__header">
                <div>
                    <span class="info-card__status">{status}</span>
                    <span class="info-card__divider">"|"</span>
                    <span class="info-card__sold">{format!("+{} vendidos", sold_count)}</span>
                </div>
                <div class="info-card__icons">
                    <span class="info-card__cart" title="Carrito">
                        "🛒"
                        <Show when=move || { cart_count.get() > 0 }>
                            <span class="info-card__cart-count">{move || cart_count.get()}</span>
                        </Show>
                    </span>
                    <span
                        class=move || {
                            if favorite.get() {
                                "info-card__heart info-card__heart--filled"
                            } else {
                                "info-card__heart"
                            }
                        }
                        title="Favorito"
                        on:click=move |_| favorite.update(|f| *f = !*f)
                    >
                        "♥"
                    </span>
                </div>
            </div>

            <h1 class="info-card__title">{title}</h1>

            <div class="info-card__rating">
                <span class="info-card__rating-value">{rating}</span>
                <StarRating rating=rating small=true />
                <span class="info-card__review-count">{format!("({})", review_count)}</span>
            </div>

            <div class="info-card__price">{format_price(price)}</div>

            <div class="info-card__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| cart_count.update(|n| *n += 1)
                >
                    "Agregar al carrito"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || cart_count.get() == 0)
                    on_click=move |_| cart_count.update(|n| *n = n.saturating_sub(1))
                >
                    "Remover del carrito"
                </Button>
            </div>
        </div>
    }
}
