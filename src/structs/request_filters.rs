use chrono::NaiveDate;
use crate::enums::request_status::RequestStatus;
use crate::structs::date_range::DateRange;

/// Filters applied to the request list and export endpoints. `None` means
/// "no filter" for that dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestFilters {
    pub status: Option<RequestStatus>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub category_id: Option<i64>,
}

impl RequestFilters {
    pub fn with_status(mut self, status: Option<RequestStatus>) -> Self {
        self.status = status;
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.start = range.start;
        self.end = range.end;
        self
    }

    pub fn with_category(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Query pairs in the server's parameter names; unset dimensions are
    /// omitted entirely.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(start) = self.start {
            params.push(("start".to_string(), start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            params.push(("end".to_string(), end.format("%Y-%m-%d").to_string()));
        }
        if let Some(category_id) = self.category_id {
            params.push(("category_id".to_string(), category_id.to_string()));
        }
        params
    }
}
