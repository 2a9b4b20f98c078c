use crate::shared::text::{truncate_for_reveal, Reveal};
use leptos::prelude::*;

/// Default cutoff for long texts
pub const DEFAULT_MAX_LEN: usize = 300;

/// Long text with a "Ver más" link. Once revealed it stays revealed.
#[component]
pub fn TruncatedText(
    #[prop(into)] text: String,
    #[prop(default = DEFAULT_MAX_LEN)] max_len: usize,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let split = truncate_for_reveal(&text, max_len);

    move || {
        if revealed.get() {
            return view! { <p class=class.clone()>{text.clone()}</p> }.into_any();
        }
        match split.clone() {
            Reveal::Whole(whole) => view! { <p class=class.clone()>{whole}</p> }.into_any(),
            Reveal::Truncated { visible, preview } => view! {
                <div>
                    <p class=class.clone()>
                        {visible}
                        <span class="text-preview">{preview}</span>
                    </p>
                    <div class="item-link-container">
                        <a class="item-link" on:click=move |_| revealed.set(true)>
                            "Ver más"
                        </a>
                    </div>
                </div>
            }
            .into_any(),
        }
    }
}
