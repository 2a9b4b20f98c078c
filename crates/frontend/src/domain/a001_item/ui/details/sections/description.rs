use crate::shared::components::truncated_text::{TruncatedText, DEFAULT_MAX_LEN};
use leptos::prelude::*;

#[component]
pub fn Description(
    #[prop(into)] description: String,
    #[prop(default = DEFAULT_MAX_LEN)] max_len: usize,
) -> impl IntoView {
    view! {
        <div class="item-description">
            <TruncatedText text=description max_len=max_len class="item-description__text" />
        </div>
    }
}
