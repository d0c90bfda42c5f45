use serde::{Deserialize, Deserializer, Serialize};

/// Canonical category shape used everywhere above the service boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub maximum_amount: Option<f64>,
    pub enabled: bool,
    pub approval_criteria: Option<String>,
    pub created_on: Option<String>,
    pub created_by: Option<String>,
    pub updated_on: Option<String>,
    pub updated_by: Option<String>,
}

/// Transport shape of a category as the backend returns it (lower-case
/// field names). Decoded into [`Category`] at the service boundary;
/// renderers never see this.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryWire {
    pub id: i64,
    pub categoryname: String,
    #[serde(default)]
    pub categorydescription: Option<String>,
    #[serde(default)]
    pub maximumamount: Option<f64>,
    #[serde(default, deserialize_with = "loose_bool")]
    pub status: bool,
    #[serde(default)]
    pub approval_criteria: Option<String>,
    #[serde(default)]
    pub createdon: Option<String>,
    #[serde(default)]
    pub createdby: Option<String>,
    #[serde(default)]
    pub updatedon: Option<String>,
    #[serde(default)]
    pub updatedby: Option<String>,
}

impl From<CategoryWire> for Category {
    fn from(wire: CategoryWire) -> Self {
        Category {
            id: wire.id,
            name: wire.categoryname,
            description: wire.categorydescription,
            maximum_amount: wire.maximumamount,
            enabled: wire.status,
            approval_criteria: wire.approval_criteria,
            created_on: wire.createdon,
            created_by: wire.createdby,
            updated_on: wire.updatedon,
            updated_by: wire.updatedby,
        }
    }
}

/// The backend is not consistent about the status column type; accept bool,
/// integer or null and coerce truthiness.
pub(crate) fn loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Bool(b)) => b,
        Some(serde_json::Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    })
}
