use serde::{Deserialize, Serialize};
use crate::structs::category::loose_bool;

/// Append-only, server-generated snapshot of a category at a point of
/// update. Read-only from this client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryHistory {
    pub id: i64,
    pub category_id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub maximum_amount: Option<f64>,
    pub enabled: bool,
    pub approval_criteria: Option<String>,
    pub comments: String,
    pub created_on: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryHistoryWire {
    pub id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub categoryname: Option<String>,
    #[serde(default)]
    pub categorydescription: Option<String>,
    #[serde(default)]
    pub maximumamount: Option<f64>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub status: bool,
    #[serde(default)]
    pub approval_criteria: Option<String>,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub createdon: Option<String>,
    #[serde(default)]
    pub createdby: Option<String>,
}

impl From<CategoryHistoryWire> for CategoryHistory {
    fn from(wire: CategoryHistoryWire) -> Self {
        CategoryHistory {
            id: wire.id,
            category_id: wire.category_id,
            name: wire.categoryname,
            description: wire.categorydescription,
            maximum_amount: wire.maximumamount,
            enabled: wire.status,
            approval_criteria: wire.approval_criteria,
            comments: wire.comments,
            created_on: wire.createdon,
            created_by: wire.createdby,
        }
    }
}
