pub mod api_config;
pub mod auth_config;
pub mod config;
