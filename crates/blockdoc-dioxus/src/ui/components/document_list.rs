use blockdoc_engine::DocumentFile;
use dioxus::prelude::*;

#[component]
pub fn DocumentList(
    documents: Vec<DocumentFile>,
    selected: Option<DocumentFile>,
    on_select: EventHandler<DocumentFile>,
) -> Element {
    if documents.is_empty() {
        return rsx! {
            p { class: "document-list-empty", "No documents found" }
        };
    }

    rsx! {
        ul {
            class: "document-list",
            for (index, file) in documents.into_iter().enumerate() {
                DocumentListItem {
                    key: "{index}",
                    is_selected: selected.as_ref() == Some(&file),
                    file,
                    on_select,
                }
            }
        }
    }
}

#[component]
fn DocumentListItem(
    file: DocumentFile,
    is_selected: bool,
    on_select: EventHandler<DocumentFile>,
) -> Element {
    let class_name = if is_selected {
        "document-list-item selected"
    } else {
        "document-list-item"
    };
    let title = file.display_path();
    let name = file.display_name().to_string();

    rsx! {
        li {
            class: "{class_name}",
            title: "{title}",
            onclick: move |_| on_select.call(file.clone()),
            "{name}"
        }
    }
}
