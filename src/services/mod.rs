pub mod api_client;
pub mod category_service;
pub mod request_service;
