use serde_json::Value;

use super::{node_attributes, node_kind};

/// The only inline kind with structural meaning.
pub const TEXT_KIND: &str = "text";

/// A formatting decoration applied to inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Code,
    /// Hyperlink; a missing target is not an error.
    Link { href: Option<String> },
    /// Unknown tag; passes its content through undecorated.
    Unknown(String),
}

impl Mark {
    pub fn from_value(value: &Value) -> Self {
        let Some(node) = value.as_object() else {
            return Mark::Unknown(String::new());
        };

        match node_kind(node).unwrap_or_default() {
            "bold" => Mark::Bold,
            "italic" => Mark::Italic,
            "code" => Mark::Code,
            "link" => Mark::Link {
                href: node_attributes(node)
                    .and_then(|attrs| attrs.get("href"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            other => Mark::Unknown(other.to_string()),
        }
    }
}

/// A span of content within a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    /// Bare string, already-resolved text.
    Text(String),
    /// Tagged node. `kind` is `None` when the value was not an object or named no kind.
    Node {
        kind: Option<String>,
        text: String,
        marks: Vec<Mark>,
    },
}

impl Inline {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(text) => Inline::Text(text.clone()),
            Value::Object(node) => Inline::Node {
                kind: node_kind(node).map(str::to_string),
                text: node
                    .get("text")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                marks: node
                    .get("marks")
                    .and_then(Value::as_array)
                    .map(|marks| marks.iter().map(Mark::from_value).collect())
                    .unwrap_or_default(),
            },
            _ => Inline::Node {
                kind: None,
                text: String::new(),
                marks: Vec::new(),
            },
        }
    }

    /// Convenience constructor for a `text` node.
    pub fn text(text: impl Into<String>, marks: Vec<Mark>) -> Self {
        Inline::Node {
            kind: Some(TEXT_KIND.to_string()),
            text: text.into(),
            marks,
        }
    }

    /// Text payload of a `text`-kind node. Bare strings and other kinds yield `None`.
    pub fn text_node_text(&self) -> Option<&str> {
        match self {
            Inline::Node {
                kind: Some(kind),
                text,
                ..
            } if kind == TEXT_KIND => Some(text.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_string_inline() {
        assert_eq!(
            Inline::from_value(&json!("hello")),
            Inline::Text("hello".to_string())
        );
    }

    #[test]
    fn test_text_node_with_marks_in_order() {
        let inline = Inline::from_value(&json!({
            "type": "text",
            "text": "X",
            "marks": [
                { "type": "bold" },
                { "type": "link", "attrs": { "href": "https://example.com" } },
                { "type": "italic" },
                { "type": "code" }
            ]
        }));

        assert_eq!(
            inline,
            Inline::text(
                "X",
                vec![
                    Mark::Bold,
                    Mark::Link {
                        href: Some("https://example.com".to_string())
                    },
                    Mark::Italic,
                    Mark::Code,
                ]
            )
        );
    }

    #[test]
    fn test_link_without_target() {
        assert_eq!(
            Mark::from_value(&json!({ "type": "link" })),
            Mark::Link { href: None }
        );
        assert_eq!(
            Mark::from_value(&json!({ "type": "link", "attrs": { "href": 5 } })),
            Mark::Link { href: None }
        );
    }

    #[test]
    fn test_unknown_marks() {
        assert_eq!(
            Mark::from_value(&json!({ "type": "strike" })),
            Mark::Unknown("strike".to_string())
        );
        assert_eq!(Mark::from_value(&json!("bold")), Mark::Unknown(String::new()));
    }

    #[test]
    fn test_text_node_text_only_for_text_kind() {
        assert_eq!(Inline::text("a", vec![]).text_node_text(), Some("a"));
        assert_eq!(Inline::Text("b".to_string()).text_node_text(), None);
        assert_eq!(
            Inline::from_value(&json!({ "type": "mention", "text": "c" })).text_node_text(),
            None
        );
        assert_eq!(Inline::from_value(&json!(12)).text_node_text(), None);
    }

    #[test]
    fn test_text_node_without_text_is_empty() {
        assert_eq!(
            Inline::from_value(&json!({ "type": "text" })).text_node_text(),
            Some("")
        );
    }
}
