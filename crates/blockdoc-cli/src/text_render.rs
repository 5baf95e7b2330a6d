//! Lays a rendered document out as styled terminal lines.
//!
//! Lines are never wrapped, so a heading's line index is also its scroll position.

use blockdoc_engine::render::{Fragment, ListStyle, RenderBlock, RenderBlockKind};
use blockdoc_engine::{AnchorId, RenderedDocument};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use std::collections::BTreeMap;

/// Styled lines plus the line each heading anchor starts on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<Line<'static>>,
    pub anchors: BTreeMap<AnchorId, usize>,
}

impl TextLayout {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn layout_document(rendered: &RenderedDocument) -> TextLayout {
    let mut layout = TextLayout::default();
    match rendered {
        RenderedDocument::Markup(markup) => {
            layout
                .lines
                .extend(markup.lines().map(|line| Line::raw(line.to_string())));
        }
        RenderedDocument::Blocks(blocks) => {
            for block in blocks {
                push_block(&mut layout, block);
                layout.lines.push(Line::default());
            }
            // Trailing separator
            layout.lines.pop();
        }
        RenderedDocument::Dump(dump) => {
            let style = Style::default().fg(Color::DarkGray);
            layout
                .lines
                .extend(dump.lines().map(|line| Line::styled(line.to_string(), style)));
        }
    }
    layout
}

fn push_block(layout: &mut TextLayout, block: &RenderBlock) {
    match &block.kind {
        RenderBlockKind::Paragraph { content } => {
            layout.lines.push(Line::from(spans(content, Style::default())));
        }
        RenderBlockKind::Heading {
            level,
            anchor,
            content,
        } => {
            layout.anchors.insert(anchor.clone(), layout.lines.len());
            let style = Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
            let marker = format!("{} ", "#".repeat(level.get().into()));
            let mut line = vec![Span::styled(marker, style)];
            line.extend(spans(content, style));
            layout.lines.push(Line::from(line));
        }
        RenderBlockKind::Blockquote { content } => {
            let style = Style::default().add_modifier(Modifier::DIM);
            let mut line = vec![Span::styled("> ", style)];
            line.extend(spans(content, style));
            layout.lines.push(Line::from(line));
        }
        RenderBlockKind::List { style, items } => {
            for (index, item) in items.iter().enumerate() {
                let marker = match style {
                    ListStyle::Bullet => "• ".to_string(),
                    ListStyle::Ordered => format!("{}. ", index + 1),
                };
                let mut line = vec![Span::raw(marker)];
                line.extend(spans(item, Style::default()));
                layout.lines.push(Line::from(line));
            }
        }
        RenderBlockKind::CodeBlock { code, language } => {
            let fence = Style::default().fg(Color::DarkGray);
            let body = Style::default().fg(Color::Cyan);
            layout.lines.push(Line::styled(
                format!("```{}", language.as_deref().unwrap_or_default()),
                fence,
            ));
            layout
                .lines
                .extend(code.lines().map(|line| Line::styled(line.to_string(), body)));
            layout.lines.push(Line::styled("```", fence));
        }
        RenderBlockKind::Image { src, alt, caption } => {
            let style = Style::default().fg(Color::Magenta);
            let mut line = vec![Span::styled(format!("[image: {alt}]"), style)];
            if let Some(src) = src {
                line.push(Span::styled(format!(" <{src}>"), link_target_style()));
            }
            layout.lines.push(Line::from(line));
            if let Some(caption) = caption {
                layout.lines.push(Line::styled(
                    caption.clone(),
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
            }
        }
        RenderBlockKind::Unrecognized { name, content } => {
            let mut line = vec![Span::styled(format!("[{name}] "), link_target_style())];
            line.extend(spans(content, Style::default()));
            layout.lines.push(Line::from(line));
        }
    }
}

/// Inline fragments as spans, marks folded into the style.
pub fn spans(fragments: &[Fragment], style: Style) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    for fragment in fragments {
        push_fragment(&mut out, fragment, style);
    }
    out
}

fn push_fragment(out: &mut Vec<Span<'static>>, fragment: &Fragment, style: Style) {
    match fragment {
        Fragment::Text(text) => out.push(Span::styled(text.clone(), style)),
        Fragment::Strong(child) => push_fragment(out, child, style.add_modifier(Modifier::BOLD)),
        Fragment::Emphasis(child) => {
            push_fragment(out, child, style.add_modifier(Modifier::ITALIC))
        }
        Fragment::Code(child) => push_fragment(out, child, style.fg(Color::Cyan)),
        Fragment::Link { href, child } => {
            push_fragment(
                out,
                child,
                style.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            );
            if let Some(href) = href {
                out.push(Span::styled(format!(" <{href}>"), link_target_style()));
            }
        }
        Fragment::Empty => {}
    }
}

fn link_target_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
