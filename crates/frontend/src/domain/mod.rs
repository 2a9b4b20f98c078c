pub mod a001_item;
