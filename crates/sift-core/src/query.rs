use std::collections::BTreeMap;

/// A user query plus optional structured metadata.
///
/// Post-processing stages only consume `query_str`; the metadata travels
/// with the query for stages that filter on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBundle {
    pub query_str: String,
    pub metadata: BTreeMap<String, String>,
}

impl QueryBundle {
    pub fn new(query_str: impl Into<String>) -> Self {
        Self {
            query_str: query_str.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}
