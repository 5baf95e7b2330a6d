//! Inline composer: inline spans to presentation fragments.

use crate::document::{Inline, Mark};

use super::types::Fragment;

/// Compose an inline sequence, one fragment per inline, order preserved.
pub fn compose_inlines(inlines: &[Inline]) -> Vec<Fragment> {
    inlines.iter().map(compose_inline).collect()
}

/// Compose a single inline.
///
/// Marks are folded in array order, each wrapping everything applied before it, so the
/// last mark ends up outermost.
pub fn compose_inline(inline: &Inline) -> Fragment {
    match inline {
        Inline::Text(text) => Fragment::text(text.as_str()),
        node => match node.text_node_text() {
            Some(text) => marks_of(node)
                .iter()
                .fold(Fragment::text(text), apply_mark),
            None => Fragment::Empty,
        },
    }
}

fn marks_of(inline: &Inline) -> &[Mark] {
    match inline {
        Inline::Node { marks, .. } => marks,
        Inline::Text(_) => &[],
    }
}

fn apply_mark(fragment: Fragment, mark: &Mark) -> Fragment {
    match mark {
        Mark::Bold => Fragment::Strong(Box::new(fragment)),
        Mark::Italic => Fragment::Emphasis(Box::new(fragment)),
        Mark::Code => Fragment::Code(Box::new(fragment)),
        Mark::Link { href } => Fragment::Link {
            href: href.clone(),
            child: Box::new(fragment),
        },
        Mark::Unknown(_) => fragment,
    }
}
