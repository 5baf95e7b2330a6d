use blockdoc_engine::{AnchorId, Outline, OutlineEntry};
use dioxus::prelude::*;

/// Navigable list of headings; the entry on screen is highlighted
#[component]
pub fn OutlinePanel(
    outline: Outline,
    active: Option<AnchorId>,
    on_select: EventHandler<AnchorId>,
) -> Element {
    if outline.is_empty() {
        return rsx! {};
    }

    let entries = outline.into_iter().map(|entry| {
        let is_active = active.as_ref() == Some(&entry.anchor_id);
        (entry.anchor_id.to_string(), is_active, entry)
    });

    rsx! {
        nav {
            class: "outline-panel",
            h2 { "On this page" }
            ul {
                for (key, is_active, entry) in entries {
                    OutlineItem { key: "{key}", entry, is_active, on_select }
                }
            }
        }
    }
}

#[component]
fn OutlineItem(entry: OutlineEntry, is_active: bool, on_select: EventHandler<AnchorId>) -> Element {
    let class_name = if is_active {
        format!("outline-entry level-{} active", entry.level)
    } else {
        format!("outline-entry level-{}", entry.level)
    };
    let href = format!("#{}", entry.anchor_id);
    let text = entry.text;
    let anchor = entry.anchor_id;

    rsx! {
        li {
            class: "{class_name}",
            a {
                href: "{href}",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    on_select.call(anchor.clone());
                },
                "{text}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockdoc_engine::{Document, extract_outline};
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use serde_json::json;

    fn outline() -> Outline {
        extract_outline(&Document::from_value(json!([
            { "type": "heading", "attrs": { "level": 1 }, "content": [{ "type": "text", "text": "Intro" }] },
            { "type": "paragraph", "content": [] },
            { "type": "heading", "attrs": { "level": 2 }, "content": [{ "type": "text", "text": "Usage" }] }
        ])))
    }

    #[component]
    fn Harness(outline: Outline, active: Option<AnchorId>) -> Element {
        rsx! {
            OutlinePanel { outline, active, on_select: move |_| {} }
        }
    }

    fn render_panel(outline: Outline, active: Option<AnchorId>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { outline, active });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_entries_link_to_heading_anchors() {
        let html = render_panel(outline(), None);

        assert!(html.contains("href=\"#heading-0\""));
        assert!(html.contains("href=\"#heading-2\""));
        assert!(html.contains("Intro"));
        assert!(html.contains("Usage"));
        assert!(!html.contains("active"));
    }

    #[test]
    fn test_active_entry_is_highlighted() {
        let html = render_panel(outline(), Some(AnchorId::for_block(2)));

        assert!(html.contains("outline-entry level-2 active"));
        assert!(html.contains("outline-entry level-1\""));
    }

    #[test]
    fn test_empty_outline_renders_nothing() {
        let html = render_panel(Outline::default(), None);

        assert!(!html.contains("outline-panel"));
    }
}
