use leptos::prelude::*;

pub const DEFAULT_LOGO_SRC: &str = "https://http2.mlstatic.com/frontend-assets/ml-web-navigation/ui-navigation/6.6.144/mercadolibre/logo_large_plus@2x.webp";
pub const DEFAULT_LOGO_ALT: &str = "Mercado Libre";

/// Yellow top bar with the store logo
#[component]
pub fn Navbar(
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] alt: Option<String>,
) -> impl IntoView {
    let src = src.unwrap_or_else(|| DEFAULT_LOGO_SRC.to_string());
    let alt = alt.unwrap_or_else(|| DEFAULT_LOGO_ALT.to_string());

    view! {
        <header class="navbar">
            <div class="navbar__content">
                <a href="/">
                    <img class="navbar__logo" src=src alt=alt />
                </a>
            </div>
        </header>
    }
}
