use crate::shared::rating::heatmap;
use contracts::domain::a001_item::aggregate::Seller;
use leptos::prelude::*;

pub const DEFAULT_SELLER_NAME: &str = "Link Game";

fn display_name(name: &str) -> String {
    if name.trim().is_empty() {
        DEFAULT_SELLER_NAME.to_string()
    } else {
        name.to_string()
    }
}

#[component]
pub fn SellerCard(seller: Seller) -> impl IntoView {
    let name = display_name(&seller.seller_name);
    let logo_alt = format!("Logo de {}", name);

    let segments = heatmap(seller.rating)
        .into_iter()
        .map(|segment| {
            let class = if segment.active {
                "heatmap__segment heatmap__segment--active"
            } else {
                "heatmap__segment"
            };
            view! { <div class=class style:background-color=segment.level.color()></div> }
        })
        .collect_view();

    view! {
        <div class="seller-card">
            <div class="seller-card__header">
                <img class="seller-card__logo" src=seller.seller_image_url alt=logo_alt />
                <div>
                    <h3 class="seller-card__name">{name}</h3>
                    <div class="seller-card__stats">
                        <span>
                            <strong>{format!("+{}", seller.followers_count)}</strong>
                            " Seguidores"
                        </span>
                        <span>
                            <strong>{format!("+{}", seller.products_count)}</strong>
                            " Productos"
                        </span>
                    </div>
                </div>
            </div>

            <div class="heatmap">{segments}</div>

            <div class="seller-card__metrics">
                <div class="seller-card__metric">
                    <strong>{format!("+{}", seller.sales_count)}</strong>
                    <span>"Ventas concretadas"</span>
                </div>
                <div class="seller-card__metric">
                    <span class="seller-card__icon">"🏢"</span>
                    <span>{seller.attention_description}</span>
                </div>
                <div class="seller-card__metric">
                    <span class="seller-card__icon">"⏱"</span>
                    <span>{seller.puntuality_description}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_defaults() {
        assert_eq!(display_name(""), "Link Game");
        assert_eq!(display_name("  "), "Link Game");
        assert_eq!(display_name("Tecno Shop"), "Tecno Shop");
    }
}
