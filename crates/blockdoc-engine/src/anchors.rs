//! Heading anchor identifiers.
//!
//! The block interpreter and the outline extractor walk the document independently, so
//! both derive anchor ids through [`AnchorId::for_block`] and nothing else. The id is a pure
//! function of the heading's zero-based position in the top-level block sequence.

use serde::Serialize;
use std::fmt;

/// Addressable element id of a rendered heading, `heading-{index}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AnchorId(String);

impl AnchorId {
    pub const PREFIX: &'static str = "heading-";

    /// Anchor id of the block at `index` in the top-level sequence.
    pub fn for_block(index: usize) -> Self {
        Self(format!("{}{index}", Self::PREFIX))
    }

    /// Accept only well-formed ids (`heading-` followed by a decimal index), e.g. ids
    /// reported back by a host environment.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix(Self::PREFIX)?;
        let index: usize = digits.parse().ok()?;
        if index.to_string() != digits {
            return None;
        }
        Some(Self::for_block(index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AnchorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
