pub mod item_section;
pub mod star_rating;
pub mod truncated_text;

pub use item_section::ItemSection;
pub use star_rating::StarRating;
pub use truncated_text::TruncatedText;
