use serde::{Deserialize, Serialize};

/// Invoice/expense request as returned by the server. Mutated only through
/// the explicit status-update call; never created or deleted by this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestItem {
    pub id: i64,
    pub user_id: String,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub approved_amount: Option<f64>,
    #[serde(default)]
    pub invoice_date: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    /// Server-authoritative, case-sensitive as returned.
    pub current_status: String,
    #[serde(default)]
    pub comments: Option<String>,
    pub approvaltype: String,
    pub created_on: String,
    pub updated_on: String,
    pub created_by: String,
    pub updated_by: String,
}
