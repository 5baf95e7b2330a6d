pub mod anchors;
pub mod document;
pub mod io;
pub mod models;
pub mod outline;
pub mod render;
pub mod tracker;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use anchors::AnchorId;
pub use document::{Document, DocumentError};
pub use io::*;
pub use models::*;
pub use outline::{MAX_OUTLINE_LEVEL, Outline, OutlineEntry, extract_outline};
pub use render::{RenderedDocument, render_document};
pub use tracker::{
    ActiveSectionTracker, NoopObserver, ScrollHost, ScrollRequest, SubscriptionId,
    VisibilityObserver,
};
