/*!
 * # Document Model
 *
 * The input side of the engine: a read-only, partially-trusted document tree as handed over
 * by the content-fetching collaborator (usually a JSON column stored by a backend).
 *
 * ## Shape
 *
 * A [`Document`] is resolved exactly once from its wire value:
 *
 * - a JSON string is **pre-formatted markup**, passed through verbatim by the renderer
 * - a JSON array is an ordered sequence of [`Block`] nodes
 * - anything else is kept as-is and later dumped as text
 *
 * ## Trust
 *
 * Nothing in the tree is trusted beyond the enumerated kinds. Unknown block kinds become
 * [`BlockKind::Unrecognized`], unknown inline kinds render empty, unknown marks pass their
 * content through. Conversion from a [`serde_json::Value`] never fails; only malformed JSON
 * text is reported as a [`DocumentError`].
 *
 * ## Wire Keys
 *
 * Nodes name their kind in `type` (`kind` is accepted as an alias), carry children in
 * `content` and metadata in `attrs` (alias `attributes`).
 */

pub mod block;
pub mod inline;

pub use block::{Attributes, Block, BlockContent, BlockKind, CodeContent, HeadingLevel, ListItem};
pub use inline::{Inline, Mark};

use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A document payload resolved into one of its three shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// Pre-formatted markup, rendered verbatim. Sanitizing it is the caller's job.
    Markup(String),
    /// Ordered top-level block sequence.
    Blocks(Vec<Block>),
    /// Any other payload shape (object, null, number, bool).
    Other(Value),
}

impl Document {
    /// Resolve a wire value into a document. Never fails.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(markup) => Document::Markup(markup),
            Value::Array(nodes) => Document::Blocks(nodes.iter().map(Block::from_value).collect()),
            other => Document::Other(other),
        }
    }

    /// Parse JSON text and resolve it into a document.
    pub fn from_json_str(json: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Document::Markup(markup.into())
    }

    /// The top-level block sequence, if this document is one.
    pub fn blocks(&self) -> Option<&[Block]> {
        match self {
            Document::Blocks(blocks) => Some(blocks),
            _ => None,
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// Kind name of a node, read from `type` and falling back to `kind` when `type` is absent
/// or not a string.
pub(crate) fn node_kind(node: &Map<String, Value>) -> Option<&str> {
    node.get("type")
        .and_then(Value::as_str)
        .or_else(|| node.get("kind").and_then(Value::as_str))
}

/// Attribute map of a node, read from `attrs` and falling back to `attributes`.
pub(crate) fn node_attributes(node: &Map<String, Value>) -> Option<&Map<String, Value>> {
    node.get("attrs")
        .and_then(Value::as_object)
        .or_else(|| node.get("attributes").and_then(Value::as_object))
}
