use crate::shared::text::split_columns;
use contracts::domain::a001_item::aggregate::{
    CharacteristicItem, CharacteristicsGroup, CharacteristicsInfo, MainCharacteristic,
};
use leptos::prelude::*;

/// Main characteristics up front, the full spec sheet behind a link
#[component]
pub fn Characteristics(info: CharacteristicsInfo) -> impl IntoView {
    let show_all = RwSignal::new(false);
    let CharacteristicsInfo {
        main_characteristics,
        other_characteristics,
    } = info;

    let (left, right) = split_columns(&main_characteristics);
    let main_left = main_column(left);
    let main_right = main_column(right);

    let others = StoredValue::new(other_characteristics);

    view! {
        <div class="characteristics">
            <div class="characteristics__main">
                <div class="characteristics__column">{main_left}</div>
                <div class="characteristics__column">{main_right}</div>
            </div>
            <Show
                when=move || show_all.get()
                fallback=move || view! {
                    <div class="item-link-container">
                        <a class="item-link" on:click=move |_| show_all.set(true)>
                            "Ver todas las características"
                        </a>
                    </div>
                }
            >
                {move || {
                    let groups = others.get_value();
                    let (left, right) = split_columns(&groups);
                    view! {
                        <div class="characteristics__others">
                            <div class="characteristics__column">{group_column(left)}</div>
                            <div class="characteristics__column">{group_column(right)}</div>
                        </div>
                    }
                }}
            </Show>
        </div>
    }
}

fn main_column(items: &[MainCharacteristic]) -> impl IntoView {
    items
        .iter()
        .cloned()
        .map(|c| {
            view! {
                <div class="characteristics__main-item">
                    <img class="characteristics__icon" src=c.icon alt="" />
                    <span>
                        {c.title} ": " <strong>{c.content}</strong>
                    </span>
                </div>
            }
        })
        .collect_view()
}

fn group_column(groups: &[CharacteristicsGroup]) -> impl IntoView {
    groups
        .iter()
        .cloned()
        .map(|group| {
            view! {
                <div class="characteristics__group">
                    <h3 class="characteristics__group-title">{group.title}</h3>
                    <table class="characteristics__table">
                        <tbody>{group_rows(group.characteristics)}</tbody>
                    </table>
                </div>
            }
        })
        .collect_view()
}

fn group_rows(rows: Vec<CharacteristicItem>) -> impl IntoView {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let class = if index % 2 == 0 {
                "characteristics__row characteristics__row--striped"
            } else {
                "characteristics__row"
            };
            view! {
                <tr class=class>
                    <th>{row.title}</th>
                    <td>{row.value}</td>
                </tr>
            }
        })
        .collect_view()
}
