use dioxus::prelude::*;

#[component]
pub fn CodeBlock(code: String, language: Option<String>) -> Element {
    let class_name = language
        .as_deref()
        .map(|language| format!("language-{language}"))
        .unwrap_or_default();

    rsx! {
        pre {
            class: "code-block",
            code { class: "{class_name}", "{code}" }
        }
    }
}
