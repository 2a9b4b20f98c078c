use super::model::{item_route, PRODUCT_OPTIONS};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Dropdown of demo products; picking one opens its detail page
#[component]
pub fn ProductPicker() -> impl IntoView {
    let selected = RwSignal::new(String::new());
    let navigate = use_navigate();

    Effect::new(move |_| {
        let value = selected.get();
        if let Some(route) = item_route(&value) {
            log::info!("Selected product: {}", value);
            navigate(&route, Default::default());
        }
    });

    view! {
        <div class="product-picker">
            <Select value=selected>
                <option value="">"Selecciona un producto"</option>
                {PRODUCT_OPTIONS
                    .iter()
                    .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                    .collect_view()}
            </Select>
        </div>
    }
}
