use serde::Serialize;
use serde_json::{Map, Value};

use super::inline::Inline;
use super::{node_attributes, node_kind};

/// Block type classification.
///
/// Only the enumerated wire names are recognized; everything else is carried as
/// `Unrecognized` and rendered through the generic fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Blockquote,
    BulletList,
    OrderedList,
    CodeBlock,
    Image,
    /// Any other kind name, kept for diagnostics and styling.
    Unrecognized(String),
}

impl BlockKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "paragraph" => BlockKind::Paragraph,
            "heading" => BlockKind::Heading,
            "blockquote" => BlockKind::Blockquote,
            "bulletList" => BlockKind::BulletList,
            "orderedList" => BlockKind::OrderedList,
            "codeBlock" => BlockKind::CodeBlock,
            "image" => BlockKind::Image,
            other => BlockKind::Unrecognized(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Blockquote => "blockquote",
            BlockKind::BulletList => "bulletList",
            BlockKind::OrderedList => "orderedList",
            BlockKind::CodeBlock => "codeBlock",
            BlockKind::Image => "image",
            BlockKind::Unrecognized(name) => name,
        }
    }
}

/// Heading level, always within 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: HeadingLevel = HeadingLevel(1);
    pub const MAX: HeadingLevel = HeadingLevel(6);

    /// Clamp a raw level into 1..=6. An absent level resolves to 1.
    pub fn clamped(raw: Option<i64>) -> Self {
        match raw {
            Some(level) => HeadingLevel(level.clamp(1, 6) as u8),
            None => Self::MIN,
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::MIN
    }
}

/// Kind-specific metadata of a block or mark.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(Map<String, Value>);

impl Attributes {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// String attribute; non-string values are treated as absent.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Integer attribute. Accepts integral numbers, floats (truncated) and numeric strings.
    pub fn integer(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// One line of a bullet or ordered list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    pub content: Vec<Inline>,
}

impl ListItem {
    pub fn from_value(value: &Value) -> Self {
        let content = value
            .as_object()
            .map(|node| inline_sequence(node.get("content")))
            .unwrap_or_default();
        Self { content }
    }
}

/// Code block payload: either a plain string or a sequence of text fragments.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeContent {
    Text(String),
    Fragments(Vec<Inline>),
}

impl CodeContent {
    /// Flatten to plain text: string fragments and `text` nodes are concatenated in order,
    /// every other fragment is dropped.
    pub fn flatten(&self) -> String {
        match self {
            CodeContent::Text(text) => text.clone(),
            CodeContent::Fragments(fragments) => fragments
                .iter()
                .filter_map(|fragment| match fragment {
                    Inline::Text(text) => Some(text.as_str()),
                    node => node.text_node_text(),
                })
                .collect(),
        }
    }
}

impl Default for CodeContent {
    fn default() -> Self {
        CodeContent::Text(String::new())
    }
}

/// Block content, interpreted according to the block kind.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Inlines(Vec<Inline>),
    Items(Vec<ListItem>),
    Code(CodeContent),
}

impl Default for BlockContent {
    fn default() -> Self {
        BlockContent::Inlines(Vec::new())
    }
}

/// A top-level structural node of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
    /// `None` when the node is not an object or names no kind; such blocks render nothing.
    pub kind: Option<BlockKind>,
    pub content: BlockContent,
    pub attributes: Attributes,
}

impl Block {
    /// Read a block node. Malformed shapes degrade instead of failing.
    pub fn from_value(value: &Value) -> Self {
        let Some(node) = value.as_object() else {
            return Self::default();
        };

        let kind = node_kind(node).map(BlockKind::from_name);
        let raw_content = node.get("content");
        let content = match kind {
            Some(BlockKind::BulletList | BlockKind::OrderedList) => BlockContent::Items(
                raw_content
                    .and_then(Value::as_array)
                    .map(|items| items.iter().map(ListItem::from_value).collect())
                    .unwrap_or_default(),
            ),
            Some(BlockKind::CodeBlock) => BlockContent::Code(match raw_content {
                Some(Value::String(text)) => CodeContent::Text(text.clone()),
                Some(Value::Array(_)) => CodeContent::Fragments(inline_sequence(raw_content)),
                _ => CodeContent::default(),
            }),
            _ => BlockContent::Inlines(inline_sequence(raw_content)),
        };
        let attributes = node_attributes(node)
            .cloned()
            .map(Attributes::new)
            .unwrap_or_default();

        Self {
            kind,
            content,
            attributes,
        }
    }

    /// Resolved heading level from `attrs.level`. Meaningful for headings only, but total.
    pub fn heading_level(&self) -> HeadingLevel {
        HeadingLevel::clamped(self.attributes.integer("level"))
    }

    pub fn is_heading(&self) -> bool {
        self.kind == Some(BlockKind::Heading)
    }

    /// Inline content; empty for list and code blocks.
    pub fn inlines(&self) -> &[Inline] {
        match &self.content {
            BlockContent::Inlines(inlines) => inlines,
            _ => &[],
        }
    }
}

fn inline_sequence(content: Option<&Value>) -> Vec<Inline> {
    content
        .and_then(Value::as_array)
        .map(|nodes| nodes.iter().map(Inline::from_value).collect())
        .unwrap_or_default()
}
