pub mod payment_methods;
pub mod repository;
