use crate::ui::components::{DocumentList, DocumentPanel, ErrorScreen};
use blockdoc_engine::{Document, DocumentFile, io};
use dioxus::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;

const BLOCKDOC_CSS: &str = include_str!("../assets/blockdoc.css");

/// A document that failed to open, kept for the error panel.
#[derive(Debug, Clone, PartialEq)]
struct LoadFailure {
    file: DocumentFile,
    reason: String,
}

#[component]
pub fn App(documents_path: PathBuf, header_offset: f64) -> Element {
    let documents = use_signal(|| match io::list_documents(&documents_path) {
        Ok(documents) => documents,
        Err(e) => {
            log::error!("Error scanning documents: {e}");
            Vec::new()
        }
    });

    let mut selected_file = use_signal(|| None::<DocumentFile>);
    let mut current_document = use_signal(|| None::<Arc<Document>>);
    let mut load_failure = use_signal(|| None::<LoadFailure>);

    let open_document = move |file: DocumentFile| {
        match io::read_document(file.relative_path(), &documents_path) {
            Ok(document) => {
                log::info!("Opened {}", file.relative_path());
                current_document.set(Some(Arc::new(document)));
                load_failure.set(None);
            }
            Err(e) => {
                log::error!("Error opening {}: {e}", file.relative_path());
                current_document.set(None);
                load_failure.set(Some(LoadFailure {
                    file: file.clone(),
                    reason: e.to_string(),
                }));
            }
        }
        selected_file.set(Some(file));
    };

    // One panel instance per file, so a switch remounts headings and their tracker.
    let panel_key = selected_file
        .read()
        .as_ref()
        .map(|file| file.relative_path().to_string())
        .unwrap_or_default();

    rsx! {
        style { {BLOCKDOC_CSS} }
        header {
            class: "app-header",
            span { class: "app-title", "blockdoc" }
            if let Some(file) = selected_file.read().as_ref() {
                span { class: "app-breadcrumb", {file.display_path()} }
            }
        }
        div {
            class: "app-container",
            aside {
                class: "sidebar",
                h2 { "Documents" }
                DocumentList {
                    documents: documents.read().clone(),
                    selected: selected_file.read().clone(),
                    on_select: open_document,
                }
            }
            main {
                class: "main-content",
                if let Some(failure) = load_failure.read().as_ref() {
                    ErrorScreen {
                        title: "Could not open document".to_string(),
                        message: failure.file.display_path(),
                        details: Some(failure.reason.clone()),
                    }
                } else if let (Some(file), Some(document)) = (
                    selected_file.read().as_ref(),
                    current_document.read().as_ref()
                ) {
                    DocumentPanel {
                        key: "{panel_key}",
                        file: file.clone(),
                        document: document.clone(),
                        header_offset,
                    }
                } else {
                    div {
                        class: "welcome",
                        h1 { "blockdoc" }
                        p { "Select a document from the sidebar to view it" }
                    }
                }
            }
        }
    }
}
