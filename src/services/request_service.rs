use crate::config::constants::DEFAULT_UPDATED_BY;
use crate::enums::request_status::RequestStatus;
use crate::errors::{InvoflowError, InvoflowResult};
use crate::services::api_client::ApiClient;
use crate::structs::date_range::DateRange;
use crate::structs::insights::Insights;
use crate::structs::paginated::Paginated;
use crate::structs::request_filters::RequestFilters;
use crate::structs::request_item::RequestItem;
use crate::structs::status_update::{StatusUpdateInput, StatusUpdatePayload};
use crate::structs::validation_result::ValidationResult;

const ENDPOINT: &str = "/requests";

/// Typed façade over the request endpoints.
pub struct RequestService<'a> {
    client: &'a ApiClient,
}

impl<'a> RequestService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        page: u32,
        page_size: u32,
        filters: &RequestFilters,
    ) -> InvoflowResult<Paginated<RequestItem>> {
        let mut query = vec![
            ("page".to_string(), page.to_string()),
            ("page_size".to_string(), page_size.to_string()),
        ];
        query.extend(filters.to_query());

        log::debug!("🔍 Fetching requests with params: {:?}", query);
        self.client.get(&format!("{}/", ENDPOINT), &query).await
    }

    pub async fn list_pending(
        &self,
        page: u32,
        page_size: u32,
        range: DateRange,
        category_id: Option<i64>,
    ) -> InvoflowResult<Paginated<RequestItem>> {
        let filters = RequestFilters::default()
            .with_status(Some(RequestStatus::Pending))
            .with_range(range)
            .with_category(category_id);
        self.list(page, page_size, &filters).await
    }

    pub async fn get(&self, id: i64) -> InvoflowResult<RequestItem> {
        self.client.get(&format!("{}/{}", ENDPOINT, id), &[]).await
    }

    /// Advisory pre-flight validation; the server remains authoritative.
    pub fn validate_status_update(status: &str, comments: &str) -> ValidationResult {
        let mut errors = Vec::new();

        if status.trim().is_empty() {
            errors.push("Status is required".to_string());
        } else if RequestStatus::parse(status).is_none() {
            errors.push("Invalid status value".to_string());
        }

        if comments.trim().is_empty() {
            errors.push("Comments are required".to_string());
        }

        ValidationResult::from_errors(errors)
    }

    /// Validates, normalizes the status to title case and submits the
    /// update. Validation failures block the call entirely.
    pub async fn update_status(&self, id: i64, input: &StatusUpdateInput) -> InvoflowResult<RequestItem> {
        let validation = Self::validate_status_update(&input.status, &input.comments);
        if !validation.valid {
            return Err(InvoflowError::validation_error(
                "status update",
                &input.status,
                &validation.errors.join("; "),
                Some("Use one of: approved, rejected, pending, with a non-empty comment"),
            ));
        }

        let status = RequestStatus::parse(&input.status).ok_or_else(|| {
            InvoflowError::validation_error("status", &input.status, "Invalid status value", None)
        })?;

        let payload = StatusUpdatePayload {
            status: status.as_str().to_string(),
            comments: input.comments.clone(),
            approved_amount: input.approved_amount,
            updated_by: DEFAULT_UPDATED_BY.to_string(),
        };

        self.client
            .patch(&format!("{}/{}/status", ENDPOINT, id), &payload)
            .await
    }

    /// Insights for an explicit date window; both bounds unset means the
    /// whole history.
    pub async fn insights(&self, range: DateRange) -> InvoflowResult<Insights> {
        let mut query = Vec::new();
        if let Some(start) = range.start {
            query.push(("start".to_string(), start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = range.end {
            query.push(("end".to_string(), end.format("%Y-%m-%d").to_string()));
        }
        self.client.get(&format!("{}/insights/summary", ENDPOINT), &query).await
    }

    /// Download the server-generated export for the given filters.
    pub async fn export(&self, filters: &RequestFilters) -> InvoflowResult<Vec<u8>> {
        let query = filters.to_query();
        self.client.get_bytes(&format!("{}/export", ENDPOINT), &query).await
    }
}
