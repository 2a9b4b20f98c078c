pub mod model;
pub mod page;
pub mod sections;
pub mod view_model;

pub use page::{ItemDetails, ItemPage};
