use serde::Serialize;

use crate::anchors::AnchorId;
use crate::document::HeadingLevel;

/// Presentation fragment produced by the inline composer.
///
/// Marks nest: the fragment a mark wraps is its `child`, so the outermost variant is the
/// last mark that was applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    Text(String),
    /// Strong emphasis (`bold`).
    Strong(Box<Fragment>),
    /// Emphasis (`italic`).
    Emphasis(Box<Fragment>),
    /// Inline monospace (`code`).
    Code(Box<Fragment>),
    /// Hyperlink (`link`). `href` is `None` when the mark carried no target.
    Link {
        href: Option<String>,
        child: Box<Fragment>,
    },
    /// Dropped inline content.
    Empty,
}

impl Fragment {
    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// Visible text, ignoring decoration.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Strong(child)
            | Fragment::Emphasis(child)
            | Fragment::Code(child)
            | Fragment::Link { child, .. } => child.push_plain_text(out),
            Fragment::Empty => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStyle {
    Bullet,
    Ordered,
}

/// Rendering strategy for one block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderBlockKind {
    Paragraph {
        content: Vec<Fragment>,
    },
    Heading {
        level: HeadingLevel,
        anchor: AnchorId,
        content: Vec<Fragment>,
    },
    Blockquote {
        content: Vec<Fragment>,
    },
    List {
        style: ListStyle,
        items: Vec<Vec<Fragment>>,
    },
    CodeBlock {
        code: String,
        language: Option<String>,
    },
    Image {
        src: Option<String>,
        alt: String,
        caption: Option<String>,
    },
    /// Generic container for kinds the interpreter does not know.
    Unrecognized {
        name: String,
        content: Vec<Fragment>,
    },
}

/// One rendered block, keyed by its position in the top-level sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBlock {
    pub key: usize,
    #[serde(flatten)]
    pub kind: RenderBlockKind,
}

impl RenderBlock {
    pub fn anchor(&self) -> Option<&AnchorId> {
        match &self.kind {
            RenderBlockKind::Heading { anchor, .. } => Some(anchor),
            _ => None,
        }
    }
}

/// Output of the document renderer; one variant per document shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RenderedDocument {
    /// Trusted markup, emitted verbatim.
    Markup(String),
    Blocks(Vec<RenderBlock>),
    /// Textual dump of an unexpected payload shape.
    Dump(String),
}

impl RenderedDocument {
    pub fn blocks(&self) -> &[RenderBlock] {
        match self {
            RenderedDocument::Blocks(blocks) => blocks,
            _ => &[],
        }
    }

    /// Anchor ids of every rendered heading, in document order.
    pub fn anchors(&self) -> impl Iterator<Item = &AnchorId> {
        self.blocks().iter().filter_map(RenderBlock::anchor)
    }

    /// Nothing to show: no rendered blocks, or blank markup. A dump always has content.
    pub fn is_empty(&self) -> bool {
        match self {
            RenderedDocument::Markup(markup) => markup.trim().is_empty(),
            RenderedDocument::Blocks(blocks) => blocks.is_empty(),
            RenderedDocument::Dump(_) => false,
        }
    }
}
