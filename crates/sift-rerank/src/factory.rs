use std::sync::Arc;

use crate::config::RerankClientConfig;
use crate::error::ProviderError;
use crate::providers::VoyageRerankClient;
use crate::traits::RerankClient;

pub fn build_rerank_client(
    cfg: RerankClientConfig,
) -> Result<Arc<dyn RerankClient>, ProviderError> {
    match cfg {
        RerankClientConfig::Voyage(c) => Ok(Arc::new(VoyageRerankClient::new(c)?)),
    }
}
