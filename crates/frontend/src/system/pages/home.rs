use crate::domain::a001_item::ui::picker::ProductPicker;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-container">
            <div class="home-box">
                <h1>"Bienvenido a Mercado Libre"</h1>
                <h2>"Selecciona un producto para ver sus detalles"</h2>
                <ProductPicker />
            </div>
        </div>
    }
}
