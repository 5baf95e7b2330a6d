use crate::ui::components::Block;
use blockdoc_engine::RenderedDocument;
use dioxus::prelude::*;

/// Renders a document in whichever shape it arrived
#[component]
pub fn DocumentView(rendered: RenderedDocument) -> Element {
    match rendered {
        RenderedDocument::Markup(markup) => rsx! {
            div { class: "document-markup", dangerous_inner_html: "{markup}" }
        },
        RenderedDocument::Blocks(blocks) => rsx! {
            div {
                class: "document-blocks",
                for (key, block) in blocks.into_iter().map(|block| (block.key, block)) {
                    Block { key: "{key}", block }
                }
            }
        },
        RenderedDocument::Dump(dump) => rsx! {
            pre { class: "document-dump", "{dump}" }
        },
    }
}
