//! Block interpreter: top-level blocks to render blocks.

use crate::anchors::AnchorId;
use crate::document::{Block, BlockContent, BlockKind, ListItem};

use super::inline::compose_inlines;
use super::types::{Fragment, ListStyle, RenderBlock, RenderBlockKind};

/// Interpret a top-level block sequence.
///
/// Every block with a kind yields exactly one render block, keyed by its position. Blocks
/// without a kind are skipped but still consume their position, so anchor ids of later
/// headings stay aligned with the outline.
pub fn interpret_blocks(blocks: &[Block]) -> Vec<RenderBlock> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| interpret_block(index, block))
        .collect()
}

/// Interpret the block at `index` of the top-level sequence.
pub fn interpret_block(index: usize, block: &Block) -> Option<RenderBlock> {
    let kind = match block.kind.as_ref()? {
        BlockKind::Paragraph => RenderBlockKind::Paragraph {
            content: compose_inlines(block.inlines()),
        },
        BlockKind::Heading => RenderBlockKind::Heading {
            level: block.heading_level(),
            anchor: AnchorId::for_block(index),
            content: compose_inlines(block.inlines()),
        },
        BlockKind::Blockquote => RenderBlockKind::Blockquote {
            content: compose_inlines(block.inlines()),
        },
        BlockKind::BulletList => list(ListStyle::Bullet, block),
        BlockKind::OrderedList => list(ListStyle::Ordered, block),
        BlockKind::CodeBlock => RenderBlockKind::CodeBlock {
            code: match &block.content {
                BlockContent::Code(code) => code.flatten(),
                _ => String::new(),
            },
            language: non_empty(block.attributes.str("language")),
        },
        BlockKind::Image => RenderBlockKind::Image {
            src: block.attributes.str("src").map(str::to_string),
            alt: block.attributes.str("alt").unwrap_or_default().to_string(),
            caption: non_empty(block.attributes.str("caption")),
        },
        BlockKind::Unrecognized(name) => RenderBlockKind::Unrecognized {
            name: name.clone(),
            content: compose_inlines(block.inlines()),
        },
    };

    Some(RenderBlock { key: index, kind })
}

fn list(style: ListStyle, block: &Block) -> RenderBlockKind {
    let items = match &block.content {
        BlockContent::Items(items) => items.iter().map(list_line).collect(),
        _ => Vec::new(),
    };
    RenderBlockKind::List { style, items }
}

fn list_line(item: &ListItem) -> Vec<Fragment> {
    compose_inlines(&item.content)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn blocks(value: Value) -> Vec<Block> {
        match Document::from_value(value) {
            Document::Blocks(blocks) => blocks,
            other => panic!("expected a block sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_one_render_block_per_kinded_block() {
        let input = blocks(json!([
            { "type": "paragraph", "content": ["a"] },
            { "content": ["no kind"] },
            42,
            { "type": "mystery", "content": ["b"] },
            { "type": "heading", "content": ["c"] }
        ]));

        let rendered = interpret_blocks(&input);

        assert_eq!(
            rendered.iter().map(|b| b.key).collect::<Vec<_>>(),
            vec![0, 3, 4]
        );
    }

    #[test]
    fn test_heading_anchor_uses_top_level_position() {
        let input = blocks(json!([
            { "content": [] },
            { "type": "paragraph", "content": [] },
            { "type": "heading", "attrs": { "level": 2 }, "content": ["Title"] }
        ]));

        let rendered = interpret_blocks(&input);

        assert_eq!(
            rendered[1].kind,
            RenderBlockKind::Heading {
                level: crate::document::HeadingLevel::clamped(Some(2)),
                anchor: AnchorId::for_block(2),
                content: vec![Fragment::text("Title")],
            }
        );
    }

    #[test]
    fn test_heading_level_clamps_down() {
        let input = blocks(json!([{ "type": "heading", "attrs": { "level": 12 } }]));

        let RenderBlockKind::Heading { level, .. } = &interpret_blocks(&input)[0].kind else {
            panic!("expected heading");
        };
        assert_eq!(level.get(), 6);
    }

    #[test]
    fn test_lists_render_one_line_per_item() {
        let input = blocks(json!([
            {
                "type": "orderedList",
                "content": [
                    { "type": "listItem", "content": [{ "type": "text", "text": "first" }] },
                    { "type": "listItem" }
                ]
            },
            { "type": "bulletList" }
        ]));

        let rendered = interpret_blocks(&input);

        assert_eq!(
            rendered[0].kind,
            RenderBlockKind::List {
                style: ListStyle::Ordered,
                items: vec![vec![Fragment::text("first")], vec![]],
            }
        );
        assert_eq!(
            rendered[1].kind,
            RenderBlockKind::List {
                style: ListStyle::Bullet,
                items: vec![],
            }
        );
    }

    #[test]
    fn test_code_block_flattens_content() {
        let input = blocks(json!([{
            "type": "codeBlock",
            "attrs": { "language": "rust" },
            "content": ["foo", { "type": "text", "text": "bar" }, { "type": "image" }]
        }]));

        assert_eq!(
            interpret_blocks(&input)[0].kind,
            RenderBlockKind::CodeBlock {
                code: "foobar".to_string(),
                language: Some("rust".to_string()),
            }
        );
    }

    #[test]
    fn test_image_defaults() {
        let input = blocks(json!([
            { "type": "image", "attrs": { "src": "/a.png", "alt": "A", "caption": "Fig. 1" } },
            { "type": "image", "attrs": { "src": "/b.png", "caption": "" } },
            { "type": "image" }
        ]));

        let rendered = interpret_blocks(&input);

        assert_eq!(
            rendered[0].kind,
            RenderBlockKind::Image {
                src: Some("/a.png".to_string()),
                alt: "A".to_string(),
                caption: Some("Fig. 1".to_string()),
            }
        );
        assert_eq!(
            rendered[1].kind,
            RenderBlockKind::Image {
                src: Some("/b.png".to_string()),
                alt: String::new(),
                caption: None,
            }
        );
        assert_eq!(
            rendered[2].kind,
            RenderBlockKind::Image {
                src: None,
                alt: String::new(),
                caption: None,
            }
        );
    }

    #[test]
    fn test_unrecognized_kind_renders_content_generically() {
        let input = blocks(json!([{ "type": "callout", "content": ["careful"] }]));

        assert_eq!(
            interpret_blocks(&input)[0].kind,
            RenderBlockKind::Unrecognized {
                name: "callout".to_string(),
                content: vec![Fragment::text("careful")],
            }
        );
    }

    #[test]
    fn test_blockquote_composes_inline_content() {
        let input = blocks(json!([{
            "type": "blockquote",
            "content": [{ "type": "text", "text": "quoted", "marks": [{ "type": "italic" }] }]
        }]));

        assert_eq!(
            interpret_blocks(&input)[0].kind,
            RenderBlockKind::Blockquote {
                content: vec![Fragment::Emphasis(Box::new(Fragment::text("quoted")))],
            }
        );
    }
}
