//! HTML serialization of a rendered document.
//!
//! Text and attribute values are escaped; markup documents are emitted verbatim since
//! sanitizing them is the caller's responsibility.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::types::{Fragment, ListStyle, RenderBlock, RenderBlockKind, RenderedDocument};

/// Serialize a rendered document. Blocks are separated by newlines.
pub fn to_html(rendered: &RenderedDocument) -> String {
    match rendered {
        RenderedDocument::Markup(markup) => markup.clone(),
        RenderedDocument::Blocks(blocks) => blocks
            .iter()
            .map(block_to_html)
            .collect::<Vec<_>>()
            .join("\n"),
        RenderedDocument::Dump(dump) => {
            format!("<pre class=\"document-dump\">{}</pre>", encode_text(dump))
        }
    }
}

/// Serialize a single block.
pub fn block_to_html(block: &RenderBlock) -> String {
    let mut html = String::new();
    match &block.kind {
        RenderBlockKind::Paragraph { content } => {
            html.push_str("<p>");
            push_fragments(&mut html, content);
            html.push_str("</p>");
        }
        RenderBlockKind::Heading {
            level,
            anchor,
            content,
        } => {
            let level = level.get();
            html.push_str(&format!(
                "<h{level} id=\"{}\">",
                encode_double_quoted_attribute(anchor.as_str())
            ));
            push_fragments(&mut html, content);
            html.push_str(&format!("</h{level}>"));
        }
        RenderBlockKind::Blockquote { content } => {
            html.push_str("<blockquote>");
            push_fragments(&mut html, content);
            html.push_str("</blockquote>");
        }
        RenderBlockKind::List { style, items } => {
            let tag = match style {
                ListStyle::Bullet => "ul",
                ListStyle::Ordered => "ol",
            };
            html.push_str(&format!("<{tag}>"));
            for item in items {
                html.push_str("<li>");
                push_fragments(&mut html, item);
                html.push_str("</li>");
            }
            html.push_str(&format!("</{tag}>"));
        }
        RenderBlockKind::CodeBlock { code, language } => {
            match language {
                Some(language) => html.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    encode_double_quoted_attribute(language)
                )),
                None => html.push_str("<pre><code>"),
            }
            html.push_str(&encode_text(code));
            html.push_str("</code></pre>");
        }
        RenderBlockKind::Image { src, alt, caption } => {
            html.push_str("<figure><img");
            if let Some(src) = src {
                html.push_str(&format!(" src=\"{}\"", encode_double_quoted_attribute(src)));
            }
            html.push_str(&format!(" alt=\"{}\">", encode_double_quoted_attribute(alt)));
            if let Some(caption) = caption {
                html.push_str(&format!("<figcaption>{}</figcaption>", encode_text(caption)));
            }
            html.push_str("</figure>");
        }
        RenderBlockKind::Unrecognized { name, content } => {
            html.push_str(&format!(
                "<div class=\"unrecognized-block\" data-kind=\"{}\">",
                encode_double_quoted_attribute(name)
            ));
            push_fragments(&mut html, content);
            html.push_str("</div>");
        }
    }
    html
}

/// Serialize inline fragments.
pub fn fragments_to_html(fragments: &[Fragment]) -> String {
    let mut html = String::new();
    push_fragments(&mut html, fragments);
    html
}

fn push_fragments(html: &mut String, fragments: &[Fragment]) {
    for fragment in fragments {
        push_fragment(html, fragment);
    }
}

fn push_fragment(html: &mut String, fragment: &Fragment) {
    match fragment {
        Fragment::Text(text) => html.push_str(&encode_text(text)),
        Fragment::Strong(child) => wrap(html, "strong", child),
        Fragment::Emphasis(child) => wrap(html, "em", child),
        Fragment::Code(child) => wrap(html, "code", child),
        Fragment::Link { href, child } => {
            match href {
                Some(href) => html.push_str(&format!(
                    "<a href=\"{}\">",
                    encode_double_quoted_attribute(href)
                )),
                None => html.push_str("<a>"),
            }
            push_fragment(html, child);
            html.push_str("</a>");
        }
        Fragment::Empty => {}
    }
}

fn wrap(html: &mut String, tag: &str, child: &Fragment) {
    html.push_str(&format!("<{tag}>"));
    push_fragment(html, child);
    html.push_str(&format!("</{tag}>"));
}
