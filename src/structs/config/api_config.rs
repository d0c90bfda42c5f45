use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ApiConfig {
    /// Preferred base URL, tried before the built-in fallback candidates.
    pub base_url: Option<String>,
}
