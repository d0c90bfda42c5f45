pub mod commands;
pub mod duration_filter;
pub mod request_status;
