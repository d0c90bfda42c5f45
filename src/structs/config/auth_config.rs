use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuthConfig {
    /// Bearer token attached to every request when present.
    pub token: Option<String>,
}
