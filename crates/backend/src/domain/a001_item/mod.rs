pub mod images;
pub mod questions;
pub mod repository;
pub mod reviews;
pub mod service;
