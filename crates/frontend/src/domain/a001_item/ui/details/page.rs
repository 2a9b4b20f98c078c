//! Item detail page: family bar on top, two columns of sections below

use super::model::{ANSWER_MAX_LEN, DESCRIPTION_MAX_LEN, FAMILY_NAME};
use super::sections::{
    Characteristics, Description, Gallery, InfoCard, Opinions, PaymentInfoCard, QuestionBar,
    QuestionsList, SellerCard,
};
use super::view_model::ItemDetailsVm;
use crate::layout::FamilyBar;
use crate::shared::components::ItemSection;
use contracts::domain::a001_item::aggregate::Item;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

/// Route `/item/:id`
#[component]
pub fn ItemPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <div class="item-page">
            <FamilyBar family_name=FAMILY_NAME />
            // Recreated per id so each item gets its own fetch
            {move || view! { <ItemDetails item_id=item_id() /> }}
        </div>
    }
}

#[component]
pub fn ItemDetails(#[prop(into)] item_id: String) -> impl IntoView {
    let vm = ItemDetailsVm::new(item_id);
    vm.load();

    let item = vm.item();
    let error = vm.error();

    move || {
        let message = error.get();
        if !message.is_empty() {
            return view! { <div class="item-details__error">"Error: " {message}</div> }
                .into_any();
        }
        match item.get() {
            None => view! {
                <div class="item-details__loading">
                    <Spinner />
                    <span>"Loading..."</span>
                </div>
            }
            .into_any(),
            Some(item) => view! { <ItemDetailsLayout item=item /> }.into_any(),
        }
    }
}

#[component]
fn ItemDetailsLayout(item: Item) -> impl IntoView {
    let Item {
        rating_info,
        description,
        questions,
        seller,
        general_info,
        images,
        characteristics_info,
        payment_info,
        ..
    } = item;

    let on_ask = Callback::new(|question: String| {
        log::info!("Pregunta: {}", question);
    });

    view! {
        <div class="item-details">
            <div class="item-details__left">
                <Gallery images=images />
                <hr class="divider" />
                <ItemSection title="Características">
                    <Characteristics info=characteristics_info />
                </ItemSection>
                <hr class="divider" />
                <ItemSection title="Descripción">
                    <Description description=description max_len=DESCRIPTION_MAX_LEN />
                </ItemSection>
                <hr class="divider" />
                <ItemSection title="Preguntas">
                    <QuestionBar on_ask=on_ask />
                    <QuestionsList questions=questions max_len=ANSWER_MAX_LEN />
                </ItemSection>
                <hr class="divider" />
                <ItemSection title="Opiniones del producto">
                    <Opinions info=rating_info />
                </ItemSection>
            </div>
            <div class="item-details__right">
                <div class="border">
                    <InfoCard info=general_info />
                </div>
                <div class="border">
                    <SellerCard seller=seller />
                </div>
                <div class="border">
                    <PaymentInfoCard info=payment_info />
                </div>
            </div>
        </div>
    }
}
