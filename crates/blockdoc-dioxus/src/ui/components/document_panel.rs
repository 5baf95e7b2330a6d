use crate::ui::components::{DocumentView, EmptyDocument, OutlinePanel};
use crate::ui::tracking::use_section_tracking;
use blockdoc_engine::{AnchorId, Document, DocumentFile, extract_outline, render_document};
use dioxus::prelude::*;
use std::sync::Arc;

/// One open document: rendered body beside its outline
#[component]
pub fn DocumentPanel(file: DocumentFile, document: Arc<Document>, header_offset: f64) -> Element {
    let tracking = use_section_tracking(document.clone(), header_offset);
    let rendered = use_memo(use_reactive((&document,), |(document,)| {
        render_document(&document)
    }));
    let outline = use_memo(use_reactive((&document,), |(document,)| {
        extract_outline(&document)
    }));

    let active = tracking.active();
    let display_name = file.display_path();

    rsx! {
        div {
            class: "document-container",
            h1 { class: "document-title", "{display_name}" }
            hr {}
            div {
                class: "document-layout",
                article {
                    class: "document-body",
                    if rendered.read().is_empty() {
                        EmptyDocument {}
                    } else {
                        DocumentView { rendered: rendered() }
                    }
                }
                OutlinePanel {
                    outline: outline(),
                    active,
                    on_select: move |anchor: AnchorId| tracking.scroll_to(&anchor),
                }
            }
        }
    }
}
