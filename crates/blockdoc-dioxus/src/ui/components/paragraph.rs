use crate::ui::components::Fragments;
use blockdoc_engine::render::Fragment;
use dioxus::prelude::*;

#[component]
pub fn Paragraph(content: Vec<Fragment>) -> Element {
    rsx! {
        p { class: "paragraph", Fragments { fragments: content } }
    }
}
