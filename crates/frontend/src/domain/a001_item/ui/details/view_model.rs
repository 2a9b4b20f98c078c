//! ViewModel for the item detail page

use super::model;
use crate::shared::fetch::{use_get, UseGet};
use contracts::domain::a001_item::aggregate::Item;
use leptos::prelude::*;

#[derive(Clone)]
pub struct ItemDetailsVm {
    pub item_id: String,
    fetch: UseGet<Item>,
}

impl ItemDetailsVm {
    pub fn new(item_id: impl Into<String>) -> Self {
        let item_id = item_id.into();
        let fetch = use_get::<Item>(model::item_api_url(&item_id));
        Self { item_id, fetch }
    }

    /// Request the item once; a blank id never hits the server
    pub fn load(&self) {
        if self.item_id.trim().is_empty() {
            log::warn!("Item page opened without an id");
            return;
        }
        log::debug!("Loading item {}", self.item_id);
        self.fetch.request();
    }

    pub fn item(&self) -> Signal<Option<Item>> {
        self.fetch.result()
    }

    pub fn error(&self) -> Signal<String> {
        self.fetch.error()
    }
}
