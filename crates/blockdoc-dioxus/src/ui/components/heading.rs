use crate::ui::components::Fragments;
use blockdoc_engine::AnchorId;
use blockdoc_engine::render::Fragment;
use dioxus::prelude::*;

#[component]
pub fn Heading(level: u8, anchor: AnchorId, content: Vec<Fragment>) -> Element {
    let class_name = format!("heading level-{level}");
    let id = anchor.as_str();

    let content_element = rsx! {
        Fragments { fragments: content }
    };

    match level {
        1 => rsx! { h1 { id: "{id}", class: "{class_name}", {content_element} } },
        2 => rsx! { h2 { id: "{id}", class: "{class_name}", {content_element} } },
        3 => rsx! { h3 { id: "{id}", class: "{class_name}", {content_element} } },
        4 => rsx! { h4 { id: "{id}", class: "{class_name}", {content_element} } },
        5 => rsx! { h5 { id: "{id}", class: "{class_name}", {content_element} } },
        _ => rsx! { h6 { id: "{id}", class: "{class_name}", {content_element} } },
    }
}
