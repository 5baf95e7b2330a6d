use crate::ui::components::Fragments;
use blockdoc_engine::render::{Fragment, ListStyle};
use dioxus::prelude::*;

/// Bullet or ordered list, one line per item
#[component]
pub fn List(style: ListStyle, items: Vec<Vec<Fragment>>) -> Element {
    let lines = rsx! {
        for (index, item) in items.into_iter().enumerate() {
            li { key: "{index}", Fragments { fragments: item } }
        }
    };

    match style {
        ListStyle::Bullet => rsx! { ul { class: "list bullet-list", {lines} } },
        ListStyle::Ordered => rsx! { ol { class: "list ordered-list", {lines} } },
    }
}
