use std::path::PathBuf;
use chrono::NaiveDate;
use clap::Subcommand;
use crate::config::constants::{DEFAULT_EXPORT_FILE, DEFAULT_PAGE, CATEGORY_PAGE_SIZE, REPORT_PAGE_SIZE};
use crate::enums::duration_filter::DurationFilter;
use crate::enums::request_status::RequestStatus;

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", raw, e))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a sample configuration file
    Init,
    /// Insights summary plus recent requests
    Dashboard {
        #[clap(short, long, value_enum, default_value_t = DurationFilter::ThisWeek)]
        duration: DurationFilter,
        #[clap(short, long, value_enum)]
        status: Option<RequestStatus>,
    },
    /// Requests awaiting approval
    Pending {
        #[clap(short, long, value_enum, default_value_t = DurationFilter::ThisWeek)]
        duration: DurationFilter,
        #[clap(short, long)]
        category_id: Option<i64>,
    },
    /// Filtered request report with summary statistics
    Report {
        #[clap(long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        #[clap(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
        #[clap(short, long, value_enum)]
        status: Option<RequestStatus>,
        #[clap(short, long)]
        category_id: Option<i64>,
        #[clap(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[clap(long, default_value_t = REPORT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Show a single request
    Request {
        id: i64,
    },
    /// Approve, reject or re-pend a request
    UpdateStatus {
        id: i64,
        /// New status (approved, rejected or pending)
        #[clap(short, long)]
        status: String,
        /// Mandatory justification
        #[clap(short, long)]
        comments: String,
        #[clap(short, long)]
        approved_amount: Option<f64>,
    },
    /// List approval categories
    Categories {
        #[clap(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        #[clap(long, default_value_t = CATEGORY_PAGE_SIZE)]
        page_size: u32,
    },
    /// Show a single category with its change history
    Category {
        id: i64,
    },
    /// Create a new approval category
    AddCategory {
        #[clap(short, long)]
        name: String,
        #[clap(short, long)]
        description: Option<String>,
        /// Approval criteria (required by the backend)
        #[clap(long)]
        criteria: String,
        #[clap(short, long)]
        max_amount: Option<f64>,
        /// Create the category disabled
        #[clap(long)]
        disabled: bool,
    },
    /// Update an existing category (requires a change justification)
    EditCategory {
        id: i64,
        #[clap(short, long)]
        name: Option<String>,
        #[clap(short, long)]
        description: Option<String>,
        #[clap(long)]
        criteria: Option<String>,
        #[clap(short, long)]
        max_amount: Option<f64>,
        #[clap(long)]
        enabled: Option<bool>,
        /// Mandatory change justification
        #[clap(long)]
        comments: String,
    },
    /// Download the server-generated request export
    Export {
        #[clap(long, value_parser = parse_date)]
        start: Option<NaiveDate>,
        #[clap(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
        #[clap(short, long, value_enum)]
        status: Option<RequestStatus>,
        #[clap(short, long)]
        category_id: Option<i64>,
        #[clap(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
    /// Persist the API auth token
    Login {
        #[clap(short, long)]
        token: String,
    },
    /// Clear the persisted auth token
    Logout,
}
