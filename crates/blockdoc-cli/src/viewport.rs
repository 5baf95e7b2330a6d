//! Terminal host for the active-section tracker.
//!
//! A heading counts as visible when its line falls inside the scrolled window of the
//! content pane. Offsets are measured in lines.

use blockdoc_engine::AnchorId;
use blockdoc_engine::tracker::{
    ScrollBehavior, ScrollHost, ScrollRequest, SubscriptionId, VisibilityObserver,
    VisibleCallback,
};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;

/// Lines kept between the pane border and a heading scrolled into view.
pub const HEADER_CLEARANCE_LINES: f64 = 1.0;

#[derive(Default)]
pub struct TerminalObserver {
    anchor_lines: BTreeMap<AnchorId, usize>,
    subscriptions: BTreeMap<SubscriptionId, (AnchorId, VisibleCallback)>,
    visible: BTreeSet<AnchorId>,
    next_id: u64,
}

impl TerminalObserver {
    /// Replace the anchor positions of the laid-out document. Nothing is visible until the
    /// next viewport update.
    pub fn set_anchor_lines(&mut self, anchor_lines: BTreeMap<AnchorId, usize>) {
        self.anchor_lines = anchor_lines;
        self.visible.clear();
    }

    /// Report the lines currently on screen. Subscribed anchors entering the window are
    /// signalled top to bottom.
    pub fn update_viewport(&mut self, window: Range<usize>) {
        let now_visible: BTreeSet<AnchorId> = self
            .anchor_lines
            .iter()
            .filter(|(_, line)| window.contains(line))
            .map(|(anchor, _)| anchor.clone())
            .collect();

        let mut entering: Vec<(usize, VisibleCallback)> = self
            .subscriptions
            .values()
            .filter(|(anchor, _)| now_visible.contains(anchor) && !self.visible.contains(anchor))
            .filter_map(|(anchor, callback)| {
                self.anchor_lines
                    .get(anchor)
                    .map(|line| (*line, callback.clone()))
            })
            .collect();
        entering.sort_by_key(|(line, _)| *line);

        self.visible = now_visible;
        for (_, callback) in entering {
            callback();
        }
    }
}

impl VisibilityObserver for TerminalObserver {
    fn observe(
        &mut self,
        anchor: &AnchorId,
        on_visible: VisibleCallback,
    ) -> Option<SubscriptionId> {
        if !self.anchor_lines.contains_key(anchor) {
            return None;
        }
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.insert(id, (anchor.clone(), on_visible));
        Some(id)
    }

    fn release(&mut self, subscription: SubscriptionId) {
        self.subscriptions.remove(&subscription);
    }

    fn dispose_all(&mut self) {
        self.subscriptions.clear();
    }
}

/// Resolves scroll requests to a target line for the content pane.
#[derive(Debug, Default)]
pub struct TerminalScroller {
    anchor_lines: BTreeMap<AnchorId, usize>,
    target: Option<usize>,
}

impl TerminalScroller {
    pub fn set_anchor_lines(&mut self, anchor_lines: BTreeMap<AnchorId, usize>) {
        self.anchor_lines = anchor_lines;
        self.target = None;
    }

    /// Scroll position requested since the last call, if any.
    pub fn take_target(&mut self) -> Option<usize> {
        self.target.take()
    }
}

impl ScrollHost for TerminalScroller {
    fn behavior(&self) -> ScrollBehavior {
        ScrollBehavior::Instant
    }

    fn scroll(&mut self, request: ScrollRequest) {
        match self.anchor_lines.get(&request.anchor) {
            Some(line) => self.target = Some(request.target_top(*line as f64) as usize),
            None => log::debug!("no line for {}", request.anchor),
        }
    }
}
