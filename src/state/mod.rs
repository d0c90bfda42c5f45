pub mod category_store;
pub mod insights_store;
pub mod request_store;
pub mod store_state;
