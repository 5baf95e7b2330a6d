//! Outline extraction.
//!
//! Walks the top-level block sequence (not the rendered tree) and collects navigable
//! headings. Anchor ids come from [`AnchorId::for_block`], the same function the block
//! interpreter uses, so every entry points at a rendered heading.

use serde::Serialize;

use crate::anchors::AnchorId;
use crate::document::{Block, Document};

/// Deepest heading level that appears in the outline. Deeper headings still render.
pub const MAX_OUTLINE_LEVEL: u8 = 3;

/// One navigable heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub anchor_id: AnchorId,
    pub text: String,
    pub level: u8,
}

/// Ordered outline of a document. Empty means "no outline".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OutlineEntry> {
        self.entries.iter()
    }

    pub fn get(&self, anchor_id: &AnchorId) -> Option<&OutlineEntry> {
        self.entries.iter().find(|entry| &entry.anchor_id == anchor_id)
    }

    /// Position of an entry, e.g. to highlight it in a navigation list.
    pub fn position(&self, anchor_id: &AnchorId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.anchor_id == anchor_id)
    }
}

impl IntoIterator for Outline {
    type Item = OutlineEntry;
    type IntoIter = std::vec::IntoIter<OutlineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a OutlineEntry;
    type IntoIter = std::slice::Iter<'a, OutlineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Extract the outline of a document. Non-block documents have none.
pub fn extract_outline(document: &Document) -> Outline {
    document
        .blocks()
        .map(extract_outline_from_blocks)
        .unwrap_or_default()
}

/// Extract the outline of a top-level block sequence.
pub fn extract_outline_from_blocks(blocks: &[Block]) -> Outline {
    let entries = blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| outline_entry(index, block))
        .collect();
    Outline { entries }
}

fn outline_entry(index: usize, block: &Block) -> Option<OutlineEntry> {
    if !block.is_heading() {
        return None;
    }
    let level = block.heading_level().get();
    if level > MAX_OUTLINE_LEVEL {
        return None;
    }

    // Marks never influence outline text; only `text` nodes count.
    let text: String = block
        .inlines()
        .iter()
        .filter_map(|inline| inline.text_node_text())
        .collect();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    Some(OutlineEntry {
        anchor_id: AnchorId::for_block(index),
        text: text.to_string(),
        level,
    })
}
