use leptos::prelude::*;

/// Titled block of the detail page's left column
#[component]
pub fn ItemSection(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section class="item-section">
            <h2 class="item-section__title">{title}</h2>
            {children()}
        </section>
    }
}
