use dioxus::prelude::*;

/// Error panel shown in place of a document that could not be opened
#[component]
pub fn ErrorScreen(title: String, message: String, details: Option<String>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_screen_renders_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Could not open document".to_string(),
                message: "broken.json".to_string(),
                details: Some("Invalid document JSON: expected value".to_string()),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Could not open document"));
        assert!(html.contains("broken.json"));
        assert!(html.contains("Invalid document JSON"));
    }

    #[test]
    fn test_error_screen_without_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorScreen,
            ErrorScreenProps {
                title: "Oops".to_string(),
                message: "Something went wrong".to_string(),
                details: None,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Something went wrong"));
        assert!(!html.contains("error-details"));
    }
}
