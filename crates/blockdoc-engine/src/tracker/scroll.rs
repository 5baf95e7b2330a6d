use crate::anchors::AnchorId;

/// Default clearance kept between a fixed page header and the scrolled-to heading, in px.
pub const DEFAULT_HEADER_OFFSET: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

impl ScrollBehavior {
    /// Value understood by `window.scrollTo({ behavior })`.
    pub fn as_css(self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// Request to bring a heading into view below the header.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub anchor: AnchorId,
    pub header_offset: f64,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    /// Scroll position for an anchor whose top sits at `anchor_top` in document coordinates.
    pub fn target_top(&self, anchor_top: f64) -> f64 {
        (anchor_top - self.header_offset).max(0.0)
    }
}

/// Host capability that performs scrolling.
///
/// Hosts resolve the anchor's position themselves and scroll to
/// [`ScrollRequest::target_top`]. A new request supersedes any scroll still in flight.
pub trait ScrollHost {
    /// How this host moves to a target. Hosts that cannot animate report
    /// [`ScrollBehavior::Instant`].
    fn behavior(&self) -> ScrollBehavior {
        ScrollBehavior::Smooth
    }

    fn scroll(&mut self, request: ScrollRequest);
}
