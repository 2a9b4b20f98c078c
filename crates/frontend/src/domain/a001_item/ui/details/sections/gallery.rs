use contracts::domain::a001_item::aggregate::ItemImage;
use leptos::prelude::*;

/// Thumbnails beyond this are not shown
pub const MAX_THUMBNAILS: usize = 6;

#[component]
pub fn Gallery(images: Vec<ItemImage>) -> impl IntoView {
    let selected = RwSignal::new(0usize);
    let images = StoredValue::new(images);

    let thumbnails = images.with_value(|all| {
        all.iter()
            .take(MAX_THUMBNAILS)
            .cloned()
            .enumerate()
            .map(|(index, img)| {
                let class = move || {
                    if selected.get() == index {
                        "gallery__thumb gallery__thumb--selected"
                    } else {
                        "gallery__thumb"
                    }
                };
                view! {
                    <button class=class on:click=move |_| selected.set(index)>
                        <img src=img.url_small_version alt=img.alt />
                    </button>
                }
            })
            .collect_view()
    });

    let main_image = move || {
        images.with_value(|all| {
            all.get(selected.get()).map(|img| {
                view! {
                    <img
                        class="gallery__main-image"
                        src=img.url_medium_version.clone()
                        alt=img.alt.clone()
                    />
                }
            })
        })
    };

    view! {
        <div class="gallery">
            <div class="gallery__thumbs">{thumbnails}</div>
            <div class="gallery__main">{main_image}</div>
        </div>
    }
}
