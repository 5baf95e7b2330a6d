use dioxus::prelude::*;

#[component]
pub fn Image(src: Option<String>, alt: String, caption: Option<String>) -> Element {
    rsx! {
        figure {
            class: "image-block",
            img { src, alt: "{alt}" }
            if let Some(caption) = caption {
                figcaption { "{caption}" }
            }
        }
    }
}
