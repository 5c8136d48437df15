use std::time::Duration;

#[derive(Debug, Clone)]
pub struct VoyageRerankConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl VoyageRerankConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "rerank-2.5".to_string(),
            endpoint: "https://api.voyageai.com/v1/rerank".to_string(),
            timeout: Duration::from_secs(8),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RerankClientConfig {
    Voyage(VoyageRerankConfig),
}
