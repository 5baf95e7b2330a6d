/*!
 * # Rendering
 *
 * Turns a [`Document`] into a [`RenderedDocument`]: a frontend-neutral presentation tree that
 * the Dioxus components, the terminal viewer and the [`html`] writer all consume.
 *
 * ## Pipeline
 *
 * - **`inline`**: inline composer, applies marks in array order (last mark outermost)
 * - **`blocks`**: block interpreter, one render block per kinded block, keyed by position
 * - **`render_document`**: dispatch on the document shape (markup, blocks, anything else)
 * - **`html`**: HTML serialization of the presentation tree
 *
 * ## Guarantees
 *
 * Rendering is a pure function of its input: no I/O, no shared state, and the same document
 * always yields an equal tree. Nothing in here fails; malformed input degrades to an empty
 * fragment, a generic container, a skipped block or a textual dump.
 */

pub mod blocks;
pub mod html;
pub mod inline;
pub mod types;

pub use blocks::{interpret_block, interpret_blocks};
pub use inline::{compose_inline, compose_inlines};
pub use types::{Fragment, ListStyle, RenderBlock, RenderBlockKind, RenderedDocument};

use crate::document::Document;

/// Render a document according to its shape.
pub fn render_document(document: &Document) -> RenderedDocument {
    match document {
        Document::Markup(markup) => RenderedDocument::Markup(markup.clone()),
        Document::Blocks(blocks) => RenderedDocument::Blocks(interpret_blocks(blocks)),
        Document::Other(value) => RenderedDocument::Dump(format!("{value:#}")),
    }
}
