use crate::ui::components::Fragments;
use blockdoc_engine::render::Fragment;
use dioxus::prelude::*;

#[component]
pub fn BlockQuote(content: Vec<Fragment>) -> Element {
    rsx! {
        blockquote { class: "blockquote", Fragments { fragments: content } }
    }
}
