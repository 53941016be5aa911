//! Client configuration

/// Configuration for [`crate::HttpClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL, e.g. "http://localhost:3000"
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
    /// Bearer token for admin endpoints
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout: 30,
            token: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
