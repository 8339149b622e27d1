pub mod about;
pub mod analytics;
pub mod auth_form;
pub mod handlers;
pub mod landing;
pub mod navbar;
pub mod require_auth;
pub mod results;
pub mod toast;
pub mod upload_section;
pub mod utils;
