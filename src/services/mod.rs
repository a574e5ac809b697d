pub mod upload_service;
pub mod user_service;

pub use upload_service::*;
pub use user_service::*;
