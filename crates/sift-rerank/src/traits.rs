use async_trait::async_trait;

use crate::error::ProviderError;
use crate::types::{RerankRequest, RerankResponse};

/// One remote reranking call: a query and candidate texts in, an ordered
/// list of (index, score) pairs out. Implementations bind a specific
/// service; test doubles implement it in-process.
#[async_trait]
pub trait RerankClient: Send + Sync {
    fn name(&self) -> &'static str;

    /// Model identifier requests are issued against.
    fn model(&self) -> &str;

    async fn rerank(&self, request: RerankRequest) -> Result<RerankResponse, ProviderError>;
}
