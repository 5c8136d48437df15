use std::sync::Arc;

use sift_core::{EventSink, MetadataMode, NoopEventSink, QueryBundle, RetrievalEvent, ScoredNode};

use crate::config::VoyageRerankConfig;
use crate::error::{ProviderError, RerankError};
use crate::providers::VoyageRerankClient;
use crate::traits::RerankClient;
use crate::types::RerankRequest;

/// Post-processing stage that reorders retrieved nodes by relevance scores
/// from a remote reranking service.
///
/// Stateless across calls: configuration is fixed at construction and each
/// invocation makes exactly one client call. Client failures surface
/// unchanged; the stage adds no retry or fallback ranking. Concurrent use
/// of one instance is as safe as the injected client handle.
pub struct RerankPostprocessor {
    client: Arc<dyn RerankClient>,
    top_n: Option<usize>,
    truncation: Option<bool>,
    events: Arc<dyn EventSink>,
}

impl RerankPostprocessor {
    pub fn new(client: Arc<dyn RerankClient>) -> Self {
        Self {
            client,
            top_n: None,
            truncation: None,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Builds the stage on top of the hosted Voyage API. Client construction
    /// problems (empty key, HTTP client build failure) surface here, not on
    /// the first call.
    pub fn voyage(config: VoyageRerankConfig) -> Result<Self, ProviderError> {
        Ok(Self::new(Arc::new(VoyageRerankClient::new(config)?)))
    }

    /// Keep at most `top_n` results; unset means the full reranked list.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Ask the service to truncate over-length input instead of failing.
    pub fn with_truncation(mut self, truncation: bool) -> Self {
        self.truncation = Some(truncation);
        self
    }

    pub fn with_event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    /// Reorders `nodes` by the service's relevance ranking for `query`.
    ///
    /// Returned nodes share the input nodes' underlying `Arc<Node>`s with
    /// the service score attached; output order is whatever order the
    /// service returned. An empty input returns empty without a remote call.
    pub async fn rerank(
        &self,
        nodes: &[ScoredNode],
        query: Option<&QueryBundle>,
    ) -> Result<Vec<ScoredNode>, RerankError> {
        self.events.notify(RetrievalEvent::RerankStart {
            query: query.cloned(),
            nodes: nodes.to_vec(),
            top_n: self.top_n,
            model: self.client.model().to_string(),
        });

        let Some(query) = query else {
            return Err(RerankError::MissingQuery);
        };
        if nodes.is_empty() {
            return Ok(Vec::new());
        }

        let documents = nodes
            .iter()
            .map(|scored| scored.node.content(MetadataMode::Embed))
            .collect::<Vec<_>>();
        let response = self
            .client
            .rerank(RerankRequest {
                query: query.query_str.clone(),
                documents,
                top_n: self.top_n,
                truncation: self.truncation,
            })
            .await?;

        let mut reranked = Vec::with_capacity(response.items.len().min(nodes.len()));
        for item in response.items {
            let scored = nodes.get(item.index).ok_or(RerankError::IndexOutOfRange {
                index: item.index,
                len: nodes.len(),
            })?;
            reranked.push(ScoredNode::new(Arc::clone(&scored.node), item.score));
        }
        // The service is expected to honor top_k; the clamp keeps the output
        // bound independent of how well it behaves.
        reranked.truncate(self.top_n.unwrap_or(usize::MAX).min(nodes.len()));

        self.events.notify(RetrievalEvent::RerankEnd {
            nodes: reranked.clone(),
        });
        Ok(reranked)
    }
}
