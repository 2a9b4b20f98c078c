use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Category breadcrumb above the item, with a way back home
#[component]
pub fn FamilyBar(#[prop(into)] family_name: String) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="family-bar">
            <a
                class="family-bar__back"
                on:click=move |_| navigate("/", Default::default())
            >
                "Volver"
            </a>
            <span class="family-bar__divider">"|"</span>
            <span class="family-bar__name">{family_name}</span>
        </div>
    }
}
