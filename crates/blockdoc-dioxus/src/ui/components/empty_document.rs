use dioxus::prelude::*;

#[component]
pub fn EmptyDocument() -> Element {
    rsx! {
        div {
            class: "empty-document",
            p { "This document has no content." }
        }
    }
}
