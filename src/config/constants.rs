use std::time::Duration;

/// Candidate base URLs, tried in order after a connection-level failure.
/// A base-URL override from the config file is inserted ahead of these.
pub const FALLBACK_BASE_URLS: &[&str] = &[
    "http://127.0.0.1:8000/api",
    "http://127.0.0.1:8001/api",
    "http://localhost:8000/api",
    "http://localhost:8001/api",
];

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const REPORT_PAGE_SIZE: u32 = 50;
pub const CATEGORY_PAGE_SIZE: u32 = 100;

pub const DEFAULT_UPDATED_BY: &str = "ADMIN";
pub const DEFAULT_EXPORT_FILE: &str = "requests-export.xlsx";

pub const CONFIG_DIR_NAME: &str = ".invoflow";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn request_timeout() -> Duration {
    Duration::from_secs(REQUEST_TIMEOUT_SECS)
}
