use blockdoc_engine::render::html::to_html;
use blockdoc_engine::{
    AnchorId, Document, OutlineEntry, RenderedDocument, extract_outline, render_document,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> Document {
    let json = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.json",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    Document::from_json_str(&json).unwrap()
}

fn entry(index: usize, text: &str, level: u8) -> OutlineEntry {
    OutlineEntry {
        anchor_id: AnchorId::for_block(index),
        text: text.to_string(),
        level,
    }
}

#[test]
fn intro_renders_heading_and_bold_paragraph() {
    let document = fixture("intro");

    let html = to_html(&render_document(&document));

    insta::assert_snapshot!(html, @r#"
    <h1 id="heading-0">Intro</h1>
    <p>Hello <strong>world</strong></p>
    "#);
    assert_eq!(extract_outline(&document).entries(), &[entry(0, "Intro", 1)]);
}

#[test]
fn markup_document_passes_through() {
    let document = fixture("markup");

    let rendered = render_document(&document);

    assert_eq!(rendered, RenderedDocument::Markup("<p>Hi</p>".to_string()));
    assert_eq!(to_html(&rendered), "<p>Hi</p>");
    assert!(extract_outline(&document).is_empty());
}

#[test]
fn article_renders_every_block_kind() {
    let document = fixture("article");

    let html = to_html(&render_document(&document));

    insta::assert_snapshot!(html, @r#"
    <h1 id="heading-0">Getting started</h1>
    <p>See <em><a href="/docs?a=1&amp;b=2">the docs</a></em> &amp; more.</p>
    <h2 id="heading-2">Install</h2>
    <pre><code class="language-sh">cargo install blockdoc</code></pre>
    <ul><li>fast</li><li><code>safe</code></li></ul>
    <h4 id="heading-6">Fine print</h4>
    <figure><img src="/img/a.png" alt="Diagram"></figure>
    <div class="unrecognized-block" data-kind="callout">Careful</div>
    <h3 id="heading-9">  Usage  </h3>
    "#);
}

#[test]
fn article_outline_matches_rendered_anchors() {
    let document = fixture("article");

    let outline = extract_outline(&document);
    let rendered = render_document(&document);

    assert_eq!(
        outline.entries(),
        &[
            entry(0, "Getting started", 1),
            entry(2, "Install", 2),
            entry(9, "Usage", 3),
        ]
    );
    let anchors: Vec<&AnchorId> = rendered.anchors().collect();
    for outline_entry in &outline {
        assert!(anchors.contains(&&outline_entry.anchor_id));
    }
}

#[test]
fn object_document_is_dumped() {
    let document = Document::from_json_str(r#"{"type":"doc","content":[]}"#).unwrap();

    let html = to_html(&render_document(&document));

    insta::assert_snapshot!(html, @r#"
    <pre class="document-dump">{
      "content": [],
      "type": "doc"
    }</pre>
    "#);
}
