use serde::Serialize;

/// Caller-supplied input for a status update. `status` is kept raw so the
/// service validator owns normalization and rejection.
#[derive(Debug, Clone)]
pub struct StatusUpdateInput {
    pub status: String,
    pub comments: String,
    pub approved_amount: Option<f64>,
}

/// Wire payload for `PATCH /requests/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdatePayload {
    pub status: String,
    pub comments: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_amount: Option<f64>,
    pub updated_by: String,
}
