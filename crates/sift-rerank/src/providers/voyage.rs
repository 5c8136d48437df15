use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::VoyageRerankConfig;
use crate::error::ProviderError;
use crate::traits::RerankClient;
use crate::types::{RerankItem, RerankRequest, RerankResponse};

#[derive(Clone)]
pub struct VoyageRerankClient {
    config: VoyageRerankConfig,
    client: Client,
}

impl VoyageRerankClient {
    pub fn new(config: VoyageRerankConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::Config(
                "voyage api key is empty".to_string(),
            ));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl RerankClient for VoyageRerankClient {
    fn name(&self) -> &'static str {
        "voyage"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResponse, ProviderError> {
        if request.documents.is_empty() {
            return Err(ProviderError::Config(
                "rerank documents is empty".to_string(),
            ));
        }

        // top_k and truncation stay off the wire unless set; the service
        // then returns all documents and applies its own truncation default.
        let payload = VoyageRerankPayload {
            model: &self.config.model,
            query: &request.query,
            documents: &request.documents,
            top_k: request.top_n,
            truncation: request.truncation,
        };

        let res = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let parsed: VoyageRerankResponse = res.json().await?;
        let items = parsed
            .data
            .into_iter()
            .map(|it| RerankItem {
                index: it.index,
                score: it.relevance_score,
            })
            .collect();

        Ok(RerankResponse {
            provider: self.name().to_string(),
            model: self.config.model.clone(),
            items,
            usage_tokens: parsed.usage.and_then(|u| u.total_tokens),
        })
    }
}

#[derive(Debug, Serialize)]
struct VoyageRerankPayload<'a> {
    model: &'a str,
    query: &'a str,
    documents: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    truncation: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct VoyageRerankResponse {
    data: Vec<VoyageRerankEntry>,
    #[serde(default)]
    usage: Option<VoyageUsage>,
}

#[derive(Debug, Deserialize)]
struct VoyageRerankEntry {
    index: usize,
    relevance_score: f32,
}

#[derive(Debug, Deserialize)]
struct VoyageUsage {
    #[serde(default)]
    total_tokens: Option<u64>,
}
