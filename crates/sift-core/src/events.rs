use crate::node::ScoredNode;
use crate::query::QueryBundle;

/// Lifecycle notifications emitted by retrieval stages.
///
/// Fire-and-forget: sinks must not fail and stages do not wait on them.
#[derive(Debug, Clone)]
pub enum RetrievalEvent {
    RerankStart {
        query: Option<QueryBundle>,
        nodes: Vec<ScoredNode>,
        top_n: Option<usize>,
        model: String,
    },
    RerankEnd {
        nodes: Vec<ScoredNode>,
    },
}

/// Observability sink for [`RetrievalEvent`]s.
///
/// Stages take a sink at construction instead of looking one up from
/// ambient state; [`NoopEventSink`] is the default.
pub trait EventSink: Send + Sync {
    fn notify(&self, event: RetrievalEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn notify(&self, _event: RetrievalEvent) {}
}
