use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="home-container">
            <div class="home-box">
                <h1>"Página no encontrada"</h1>
                <a href="/">"Volver al inicio"</a>
            </div>
        </div>
    }
}
