pub mod a001_item;
pub mod system;
