pub mod api_utils;
pub mod components;
pub mod fetch;
pub mod format;
pub mod rating;
pub mod text;
