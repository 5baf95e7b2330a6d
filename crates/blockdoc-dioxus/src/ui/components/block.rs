use crate::ui::components::{
    BlockQuote, CodeBlock, Heading, Image, List, Paragraph, UnrecognizedBlock,
};
use blockdoc_engine::render::{RenderBlock, RenderBlockKind};
use dioxus::prelude::*;

/// Dispatches a render block to the component for its kind
#[component]
pub fn Block(block: RenderBlock) -> Element {
    match block.kind {
        RenderBlockKind::Paragraph { content } => rsx! { Paragraph { content } },
        RenderBlockKind::Heading {
            level,
            anchor,
            content,
        } => rsx! {
            Heading { level: level.get(), anchor, content }
        },
        RenderBlockKind::Blockquote { content } => rsx! { BlockQuote { content } },
        RenderBlockKind::List { style, items } => rsx! { List { style, items } },
        RenderBlockKind::CodeBlock { code, language } => rsx! { CodeBlock { code, language } },
        RenderBlockKind::Image { src, alt, caption } => rsx! { Image { src, alt, caption } },
        RenderBlockKind::Unrecognized { name, content } => rsx! {
            UnrecognizedBlock { name, content }
        },
    }
}
