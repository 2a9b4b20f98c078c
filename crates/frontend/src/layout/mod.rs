pub mod family_bar;
pub mod navbar;

pub use family_bar::FamilyBar;
pub use navbar::Navbar;
