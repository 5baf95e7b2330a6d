use blockdoc_engine::render::Fragment;
use dioxus::prelude::*;

/// Renders composed inline fragments in order
#[component]
pub fn Fragments(fragments: Vec<Fragment>) -> Element {
    rsx! {
        for fragment in fragments.iter() {
            {render_fragment(fragment)}
        }
    }
}

/// Render one fragment, nesting marks outermost-first
fn render_fragment(fragment: &Fragment) -> Element {
    match fragment {
        Fragment::Text(text) => rsx! { "{text}" },
        Fragment::Strong(child) => rsx! { strong { {render_fragment(child)} } },
        Fragment::Emphasis(child) => rsx! { em { {render_fragment(child)} } },
        Fragment::Code(child) => rsx! { code { {render_fragment(child)} } },
        Fragment::Link { href: Some(href), child } => {
            let target = href.clone();
            rsx! {
                a {
                    class: "external-link",
                    href: "{href}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        if let Err(e) = open_url(&target) {
                            log::warn!("Failed to open URL {target}: {e}");
                        }
                    },
                    {render_fragment(child)}
                }
            }
        }
        Fragment::Link { href: None, child } => rsx! { a { {render_fragment(child)} } },
        Fragment::Empty => rsx! {},
    }
}

/// Opens a URL in the system's default browser
fn open_url(url: &str) -> std::io::Result<()> {
    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/C", "start", url])
            .spawn()?;
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    Ok(())
}
