pub mod category;
pub mod category_history;
pub mod category_input;
pub mod cli;
pub mod config;
pub mod date_range;
pub mod insights;
pub mod paginated;
pub mod request_filters;
pub mod request_item;
pub mod status_update;
pub mod validation_result;
