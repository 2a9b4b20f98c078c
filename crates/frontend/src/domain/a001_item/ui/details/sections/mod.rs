pub mod characteristics;
pub mod description;
pub mod gallery;
pub mod info_card;
pub mod opinions;
pub mod payment;
pub mod questions;
pub mod seller_card;

pub use characteristics::Characteristics;
pub use description::Description;
pub use gallery::Gallery;
pub use info_card::InfoCard;
pub use opinions::Opinions;
pub use payment::PaymentInfoCard;
pub use questions::{QuestionBar, QuestionsList};
pub use seller_card::SellerCard;
