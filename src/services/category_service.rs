use reqwest::Method;
use crate::errors::{InvoflowError, InvoflowResult};
use crate::services::api_client::ApiClient;
use crate::structs::category::{Category, CategoryWire};
use crate::structs::category_history::{CategoryHistory, CategoryHistoryWire};
use crate::structs::category_input::{CategoryCreate, CategoryUpdate};
use crate::structs::paginated::Paginated;
use crate::structs::validation_result::ValidationResult;

const ENDPOINT: &str = "/categories";

/// Typed façade over the category endpoints. The backend speaks lower-case
/// field names on reads and multipart forms on writes; both are translated
/// here so the rest of the console only sees the canonical [`Category`].
pub struct CategoryService<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoryService<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: u32, page_size: u32) -> InvoflowResult<Paginated<Category>> {
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("page_size".to_string(), page_size.to_string()),
        ];
        let wire: Paginated<CategoryWire> = self.client.get(&format!("{}/", ENDPOINT), &query).await?;
        Ok(wire.map_items(Category::from))
    }

    pub async fn get(&self, id: i64) -> InvoflowResult<Category> {
        let wire: CategoryWire = self.client.get(&format!("{}/{}", ENDPOINT, id), &[]).await?;
        Ok(wire.into())
    }

    pub async fn history(&self, id: i64) -> InvoflowResult<Vec<CategoryHistory>> {
        let wire: Vec<CategoryHistoryWire> = self
            .client
            .get(&format!("{}/{}/history", ENDPOINT, id), &[])
            .await?;
        Ok(wire.into_iter().map(CategoryHistory::from).collect())
    }

    /// Advisory pre-flight validation for creation and edits.
    pub fn validate_category(name: &str, maximum_amount: Option<f64>) -> ValidationResult {
        let mut errors = Vec::new();

        if name.trim().is_empty() {
            errors.push("Category name is required".to_string());
        }

        if let Some(amount) = maximum_amount {
            if amount < 0.0 {
                errors.push("Maximum amount must be a positive number".to_string());
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Create a category. The name is normalized to uppercase before
    /// submission; the backend expects lower-case multipart keys here.
    pub async fn create(&self, input: &CategoryCreate) -> InvoflowResult<Category> {
        let validation = Self::validate_category(&input.name, input.maximum_amount);
        if !validation.valid {
            return Err(InvoflowError::validation_error(
                "category",
                &input.name,
                &validation.errors.join("; "),
                None,
            ));
        }
        if input.approval_criteria.trim().is_empty() {
            return Err(InvoflowError::validation_error(
                "approval_criteria",
                &input.approval_criteria,
                "Approval criteria is required",
                None,
            ));
        }

        let mut fields = vec![
            ("categoryname".to_string(), input.name.trim().to_uppercase()),
            (
                "categorydescription".to_string(),
                input.description.clone().unwrap_or_default(),
            ),
            ("status_param".to_string(), input.enabled.to_string()),
            ("approval_criteria".to_string(), input.approval_criteria.clone()),
        ];
        if let Some(amount) = input.maximum_amount {
            fields.push(("maximumamount".to_string(), amount.to_string()));
        }

        let wire: CategoryWire = self
            .client
            .upload_multipart(Method::POST, &format!("{}/", ENDPOINT), &fields)
            .await?;
        Ok(wire.into())
    }

    /// Update a category. Edits carry a mandatory change justification and
    /// use the capitalized multipart keys of the update endpoint.
    pub async fn update(&self, id: i64, input: &CategoryUpdate) -> InvoflowResult<Category> {
        if input.comments.trim().is_empty() {
            return Err(InvoflowError::validation_error(
                "comments",
                &input.comments,
                "A change justification is required",
                Some("Pass --comments with the reason for the edit"),
            ));
        }
        if let Some(name) = &input.name {
            let validation = Self::validate_category(name, input.maximum_amount);
            if !validation.valid {
                return Err(InvoflowError::validation_error(
                    "category",
                    name,
                    &validation.errors.join("; "),
                    None,
                ));
            }
        } else if let Some(amount) = input.maximum_amount {
            if amount < 0.0 {
                return Err(InvoflowError::validation_error(
                    "maximum_amount",
                    &amount.to_string(),
                    "Maximum amount must be a positive number",
                    None,
                ));
            }
        }

        let mut fields = Vec::new();
        if let Some(name) = &input.name {
            fields.push(("CategoryName".to_string(), name.trim().to_uppercase()));
        }
        if let Some(description) = &input.description {
            fields.push(("CategoryDescription".to_string(), description.clone()));
        }
        if let Some(amount) = input.maximum_amount {
            fields.push(("MaximumAmount".to_string(), amount.to_string()));
        }
        if let Some(enabled) = input.enabled {
            fields.push(("Status".to_string(), enabled.to_string()));
        }
        if let Some(criteria) = &input.approval_criteria {
            fields.push(("ApprovalCriteria".to_string(), criteria.clone()));
        }
        fields.push(("Comments".to_string(), input.comments.clone()));

        let wire: CategoryWire = self
            .client
            .upload_multipart(Method::PATCH, &format!("{}/{}", ENDPOINT, id), &fields)
            .await?;
        Ok(wire.into())
    }
}
