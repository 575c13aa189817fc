pub mod api_client;
pub mod auth_service;
pub mod darkweb_service;
pub mod email_service;
pub mod government_service;
pub mod image_service;
pub mod news_service;
pub mod social_service;
pub mod token_storage;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod fetch_transport;
#[cfg(not(target_arch = "wasm32"))]
pub mod reqwest_transport;

pub use api_client::{ApiClient, UnauthorizedHandler};
pub use auth_service::AuthService;
pub use darkweb_service::DarkWebService;
pub use email_service::EmailService;
pub use government_service::GovernmentService;
pub use image_service::ImageService;
pub use news_service::NewsService;
pub use social_service::SocialService;
pub use token_storage::{MemoryTokenStorage, TokenStorage};
pub use transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport, UploadFile};

#[cfg(target_arch = "wasm32")]
pub use fetch_transport::FetchTransport;
#[cfg(target_arch = "wasm32")]
pub use token_storage::LocalTokenStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use reqwest_transport::ReqwestTransport;
