/// One entry of the home page product dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const PRODUCT_OPTIONS: &[PickerOption] = &[PickerOption {
    value: "55747713-9cd4-45f7-a4cd-9916ed17a61d",
    label: "Samsung",
}];

/// Route to open for a dropdown value; the empty placeholder goes nowhere
pub fn item_route(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(format!("/item/{}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_route() {
        assert_eq!(item_route(""), None);
        assert_eq!(
            item_route(PRODUCT_OPTIONS[0].value).as_deref(),
            Some("/item/55747713-9cd4-45f7-a4cd-9916ed17a61d")
        );
    }
}
