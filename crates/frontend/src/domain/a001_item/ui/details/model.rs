use crate::shared::api_utils::item_url;

/// Category shown in the family bar
pub const FAMILY_NAME: &str = "Celulares y Smartphones";

/// Description cutoff used by the detail page
pub const DESCRIPTION_MAX_LEN: usize = 150;

/// Answer cutoff in the questions list
pub const ANSWER_MAX_LEN: usize = 500;

/// Endpoint of one item
pub fn item_api_url(id: &str) -> String {
    item_url(id)
}
