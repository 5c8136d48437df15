use std::collections::BTreeMap;
use std::sync::Arc;

/// Controls which parts of a node are rendered by [`Node::content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataMode {
    /// Metadata and body text, for display or LLM consumption.
    All,
    /// Metadata and body text as fed to embedding/reranking models.
    Embed,
    /// Body text only.
    None,
}

/// A retrieved item: body text plus flat string metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: String,
    pub text: String,
    pub metadata: BTreeMap<String, String>,
}

impl Node {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Renders the node as text. `All` and `Embed` prepend one `key: value`
    /// line per metadata entry, in key order, separated from the body by a
    /// blank line.
    pub fn content(&self, mode: MetadataMode) -> String {
        match mode {
            MetadataMode::None => self.text.clone(),
            MetadataMode::All | MetadataMode::Embed => {
                if self.metadata.is_empty() {
                    return self.text.clone();
                }
                let header = self
                    .metadata
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!("{header}\n\n{}", self.text)
            }
        }
    }
}

/// A node paired with a relevance score.
///
/// The node is behind an `Arc` so that rescoring stages hand back the same
/// underlying item with a new score attached.
#[derive(Debug, Clone)]
pub struct ScoredNode {
    pub node: Arc<Node>,
    pub score: f32,
}

impl ScoredNode {
    pub fn new(node: Arc<Node>, score: f32) -> Self {
        Self { node, score }
    }

    pub fn from_node(node: Node, score: f32) -> Self {
        Self {
            node: Arc::new(node),
            score,
        }
    }
}
