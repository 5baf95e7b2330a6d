use crate::ui::components::Fragments;
use blockdoc_engine::render::Fragment;
use dioxus::prelude::*;

/// Generic container for block kinds the viewer does not know
#[component]
pub fn UnrecognizedBlock(name: String, content: Vec<Fragment>) -> Element {
    rsx! {
        div {
            class: "unrecognized-block",
            "data-kind": "{name}",
            Fragments { fragments: content }
        }
    }
}
