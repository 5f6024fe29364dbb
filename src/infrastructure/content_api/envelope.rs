use serde::{Deserialize, Serialize};

/// Body shape of every content API response. Extra keys such as `stats`
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}
