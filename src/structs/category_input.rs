/// Input for category creation. The name is normalized to uppercase by the
/// service before submission.
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub maximum_amount: Option<f64>,
    pub enabled: bool,
    pub approval_criteria: String,
}

/// Input for a category update. Only set fields are sent; `comments` is the
/// mandatory change justification.
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub maximum_amount: Option<f64>,
    pub enabled: Option<bool>,
    pub approval_criteria: Option<String>,
    pub comments: String,
}
