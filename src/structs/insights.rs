use serde::{Deserialize, Serialize};

/// Aggregate request counts for a filter window, recomputed server-side on
/// every fetch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Insights {
    pub total: u64,
    pub approved: u64,
    pub rejected: u64,
    pub pending: u64,
}
