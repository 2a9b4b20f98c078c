pub mod a001_item;
pub mod a002_product;
pub mod a003_seller;
