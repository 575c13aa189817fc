pub mod darkweb_store;
pub mod email_store;
pub mod government_store;
pub mod image_store;
pub mod news_store;
pub mod social_store;

pub use darkweb_store::DarkWebStore;
pub use email_store::EmailStore;
pub use government_store::GovernmentStore;
pub use image_store::ImageStore;
pub use news_store::NewsStore;
pub use social_store::SocialStore;
