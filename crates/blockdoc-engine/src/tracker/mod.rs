/*!
 * # Active-Section Tracking
 *
 * Keeps track of which outline heading is currently visible and scrolls to headings on
 * request. This is the only stateful part of the engine.
 *
 * ## Host Capabilities
 *
 * The host environment is injected through two traits:
 *
 * - **[`VisibilityObserver`]**: `observe(anchor, on_visible)` / `release` / `dispose_all`.
 *   [`NoopObserver`] stands in for hosts that cannot observe visibility.
 * - **[`ScrollHost`]**: performs a [`ScrollRequest`].
 *
 * ## State Machine
 *
 * One value, the active anchor id:
 *
 * - starts as `None`
 * - a visibility signal for a tracked anchor makes that anchor active; signals are applied in
 *   delivery order, the last one wins
 * - a new document (by `Arc` identity) resets it to `None`, recomputes the outline,
 *   subscribes the new anchors and only then releases the previous subscriptions
 * - scrolling never touches it; the visibility signal that follows does
 *
 * Callbacks from released subscriptions carry a stale generation and are ignored, so two
 * documents can never both drive the active anchor.
 *
 * ## Threading
 *
 * Single-threaded and callback driven: state lives behind `Rc`, so a tracker is not `Send`.
 */

pub mod observer;
pub mod scroll;

pub use observer::{NoopObserver, SubscriptionId, VisibilityObserver, VisibleCallback};
pub use scroll::{DEFAULT_HEADER_OFFSET, ScrollBehavior, ScrollHost, ScrollRequest};

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use crate::anchors::AnchorId;
use crate::document::Document;
use crate::outline::{Outline, extract_outline};

type ChangeListener = Box<dyn FnMut(Option<&AnchorId>)>;

/// State shared with the visibility callbacks.
#[derive(Default)]
struct SectionState {
    active: RefCell<Option<AnchorId>>,
    generation: Cell<u64>,
    listener: RefCell<Option<ChangeListener>>,
}

impl SectionState {
    fn set_active(&self, anchor: Option<AnchorId>) {
        if *self.active.borrow() == anchor {
            return;
        }
        self.active.replace(anchor.clone());
        if let Some(listener) = self.listener.borrow_mut().as_mut() {
            listener(anchor.as_ref());
        }
    }

    /// Invalidate every callback handed out so far and return the new generation.
    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }
}

/// Tracks the visible heading of one document view.
pub struct ActiveSectionTracker<O: VisibilityObserver, S: ScrollHost> {
    observer: O,
    scroll_host: S,
    header_offset: f64,
    state: Rc<SectionState>,
    document: Option<Arc<Document>>,
    outline: Outline,
    subscriptions: Vec<SubscriptionId>,
    warned_unsupported: bool,
}

impl<O: VisibilityObserver, S: ScrollHost> ActiveSectionTracker<O, S> {
    pub fn new(observer: O, scroll_host: S) -> Self {
        Self {
            observer,
            scroll_host,
            header_offset: DEFAULT_HEADER_OFFSET,
            state: Rc::new(SectionState::default()),
            document: None,
            outline: Outline::default(),
            subscriptions: Vec::new(),
            warned_unsupported: false,
        }
    }

    /// Clearance subtracted from a heading's position when scrolling to it.
    pub fn with_header_offset(mut self, header_offset: f64) -> Self {
        self.header_offset = header_offset;
        self
    }

    /// Register a listener called whenever the active anchor changes.
    pub fn on_change(&mut self, listener: impl FnMut(Option<&AnchorId>) + 'static) {
        self.state.listener.replace(Some(Box::new(listener)));
    }

    pub fn active_anchor(&self) -> Option<AnchorId> {
        self.state.active.borrow().clone()
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// False when the host lacks visibility observation; the active anchor then stays `None`.
    pub fn is_enabled(&self) -> bool {
        self.observer.is_supported()
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn scroll_host_mut(&mut self) -> &mut S {
        &mut self.scroll_host
    }

    /// Point the tracker at a document.
    ///
    /// Does nothing and returns `false` when `document` is the one already tracked.
    /// Otherwise resets the active anchor, recomputes the outline and replaces the
    /// subscriptions (new set first, old set released afterwards).
    pub fn set_document(&mut self, document: &Arc<Document>) -> bool {
        if let Some(current) = &self.document
            && Arc::ptr_eq(current, document)
        {
            return false;
        }

        self.document = Some(Arc::clone(document));
        let generation = self.state.next_generation();
        self.state.set_active(None);
        self.outline = extract_outline(document);

        let previous = std::mem::take(&mut self.subscriptions);
        if self.observer.is_supported() {
            self.subscriptions = self.subscribe(generation);
        } else if !self.warned_unsupported {
            self.warned_unsupported = true;
            log::warn!("Visibility observation unavailable; active section tracking disabled");
        }
        for subscription in previous {
            self.observer.release(subscription);
        }

        log::debug!(
            "Tracking {} of {} outline anchors",
            self.subscriptions.len(),
            self.outline.len()
        );
        true
    }

    fn subscribe(&mut self, generation: u64) -> Vec<SubscriptionId> {
        let mut subscriptions = Vec::with_capacity(self.outline.len());
        for entry in self.outline.iter() {
            let state = Rc::downgrade(&self.state);
            let anchor = entry.anchor_id.clone();
            let on_visible: VisibleCallback = Rc::new(move || {
                if let Some(state) = state.upgrade()
                    && state.generation.get() == generation
                {
                    state.set_active(Some(anchor.clone()));
                }
            });

            match self.observer.observe(&entry.anchor_id, on_visible) {
                Some(subscription) => subscriptions.push(subscription),
                None => log::debug!("No rendered element for anchor {}", entry.anchor_id),
            }
        }
        subscriptions
    }

    /// Ask the host to bring `anchor` into view below the header, smoothly where the host
    /// can animate.
    ///
    /// The active anchor is left alone; it follows from the visibility signal.
    pub fn scroll_to_heading(&mut self, anchor: &AnchorId) {
        self.scroll_host.scroll(ScrollRequest {
            anchor: anchor.clone(),
            header_offset: self.header_offset,
            behavior: self.scroll_host.behavior(),
        });
    }

    /// Release every subscription. Further signals are ignored.
    pub fn dispose(&mut self) {
        self.state.next_generation();
        for subscription in std::mem::take(&mut self.subscriptions) {
            self.observer.release(subscription);
        }
        self.observer.dispose_all();
    }
}

impl<O: VisibilityObserver, S: ScrollHost> Drop for ActiveSectionTracker<O, S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::heading;
    use serde_json::{Value, json};
    use std::collections::{BTreeMap, HashSet};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Observe(SubscriptionId, AnchorId),
        Release(SubscriptionId),
        DisposeAll,
    }

    #[derive(Default)]
    struct FakeState {
        next_id: u64,
        live: BTreeMap<SubscriptionId, AnchorId>,
        every_callback: Vec<(AnchorId, VisibleCallback)>,
        live_callbacks: BTreeMap<SubscriptionId, VisibleCallback>,
        missing: HashSet<AnchorId>,
        events: Vec<Event>,
    }

    /// Test double that lets tests fire visibility signals by anchor.
    #[derive(Clone, Default)]
    struct FakeObserver {
        state: Rc<RefCell<FakeState>>,
    }

    impl FakeObserver {
        fn fire(&self, anchor: &AnchorId) {
            let callbacks: Vec<VisibleCallback> = {
                let state = self.state.borrow();
                state
                    .live
                    .iter()
                    .filter(|(_, a)| *a == anchor)
                    .filter_map(|(id, _)| state.live_callbacks.get(id).cloned())
                    .collect()
            };
            for callback in callbacks {
                callback();
            }
        }

        /// Invoke every callback ever handed out for `anchor`, released or not.
        fn fire_including_released(&self, anchor: &AnchorId) {
            let callbacks: Vec<VisibleCallback> = self
                .state
                .borrow()
                .every_callback
                .iter()
                .filter(|(a, _)| a == anchor)
                .map(|(_, callback)| callback.clone())
                .collect();
            for callback in callbacks {
                callback();
            }
        }

        fn live_anchors(&self) -> Vec<AnchorId> {
            self.state.borrow().live.values().cloned().collect()
        }

        fn events(&self) -> Vec<Event> {
            self.state.borrow().events.clone()
        }
    }

    impl VisibilityObserver for FakeObserver {
        fn observe(
            &mut self,
            anchor: &AnchorId,
            on_visible: VisibleCallback,
        ) -> Option<SubscriptionId> {
            let mut state = self.state.borrow_mut();
            if state.missing.contains(anchor) {
                return None;
            }
            state.next_id += 1;
            let id = SubscriptionId(state.next_id);
            state.live.insert(id, anchor.clone());
            state.live_callbacks.insert(id, on_visible.clone());
            state.every_callback.push((anchor.clone(), on_visible));
            state.events.push(Event::Observe(id, anchor.clone()));
            Some(id)
        }

        fn release(&mut self, subscription: SubscriptionId) {
            let mut state = self.state.borrow_mut();
            state.live.remove(&subscription);
            state.live_callbacks.remove(&subscription);
            state.events.push(Event::Release(subscription));
        }

        fn dispose_all(&mut self) {
            let mut state = self.state.borrow_mut();
            state.live.clear();
            state.live_callbacks.clear();
            state.events.push(Event::DisposeAll);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingScroller {
        requests: Rc<RefCell<Vec<ScrollRequest>>>,
    }

    impl ScrollHost for RecordingScroller {
        fn scroll(&mut self, request: ScrollRequest) {
            self.requests.borrow_mut().push(request);
        }
    }

    fn doc(value: Value) -> Arc<Document> {
        Arc::new(Document::from_value(value))
    }

    fn tracker() -> (
        ActiveSectionTracker<FakeObserver, RecordingScroller>,
        FakeObserver,
        RecordingScroller,
    ) {
        let observer = FakeObserver::default();
        let scroller = RecordingScroller::default();
        let tracker = ActiveSectionTracker::new(observer.clone(), scroller.clone());
        (tracker, observer, scroller)
    }

    #[test]
    fn test_initially_no_active_anchor() {
        let (tracker, _, _) = tracker();
        assert_eq!(tracker.active_anchor(), None);
        assert!(tracker.outline().is_empty());
    }

    #[test]
    fn test_subscribes_to_outline_anchors_only() {
        let (mut tracker, observer, _) = tracker();
        tracker.set_document(&doc(json!([
            heading(1, "A"),
            { "type": "paragraph", "content": ["p"] },
            heading(4, "Deep"),
            heading(2, "B")
        ])));

        assert_eq!(
            observer.live_anchors(),
            vec![AnchorId::for_block(0), AnchorId::for_block(3)]
        );
    }

    #[test]
    fn test_visibility_signal_sets_active_anchor() {
        let (mut tracker, observer, _) = tracker();
        tracker.set_document(&doc(json!([heading(1, "A"), heading(2, "B")])));

        observer.fire(&AnchorId::for_block(1));

        assert_eq!(tracker.active_anchor(), Some(AnchorId::for_block(1)));
    }

    #[test]
    fn test_last_delivered_signal_wins() {
        let (mut tracker, observer, _) = tracker();
        tracker.set_document(&doc(json!([heading(1, "A"), heading(2, "B"), heading(2, "C")])));

        observer.fire(&AnchorId::for_block(2));
        observer.fire(&AnchorId::for_block(0));

        assert_eq!(tracker.active_anchor(), Some(AnchorId::for_block(0)));
    }

    #[test]
    fn test_same_document_does_not_resubscribe() {
        let (mut tracker, observer, _) = tracker();
        let document = doc(json!([heading(1, "A")]));

        assert!(tracker.set_document(&document));
        observer.fire(&AnchorId::for_block(0));
        assert!(!tracker.set_document(&document));

        assert_eq!(tracker.active_anchor(), Some(AnchorId::for_block(0)));
        assert_eq!(observer.events().len(), 1);
    }

    #[test]
    fn test_new_document_resets_and_replaces_subscriptions() {
        let (mut tracker, observer, _) = tracker();
        tracker.set_document(&doc(json!([heading(1, "A"), heading(1, "B")])));
        observer.fire(&AnchorId::for_block(1));

        tracker.set_document(&doc(json!([{ "type": "paragraph" }, heading(2, "C")])));

        assert_eq!(tracker.active_anchor(), None);
        assert_eq!(observer.live_anchors(), vec![AnchorId::for_block(1)]);
        assert_eq!(tracker.outline().entries()[0].text, "C");
    }

    #[test]
    fn test_new_subscriptions_acquired_before_old_released() {
        let (mut tracker, observer, _) = tracker();
        tracker.set_document(&doc(json!([heading(1, "A")])));
        tracker.set_document(&doc(json!([heading(1, "B")])));

        assert_eq!(
            observer.events(),
            vec![
                Event::Observe(SubscriptionId(1), AnchorId::for_block(0)),
                Event::Observe(SubscriptionId(2), AnchorId::for_block(0)),
                Event::Release(SubscriptionId(1)),
            ]
        );
    }

    #[test]
    fn test_signals_from_released_subscriptions_are_ignored() {
        let (mut tracker, observer, _) = tracker();
        tracker.set_document(&doc(json!([heading(1, "A"), heading(1, "B")])));
        tracker.set_document(&doc(json!([heading(1, "C")])));

        observer.fire_including_released(&AnchorId::for_block(1));
        assert_eq!(tracker.active_anchor(), None);

        observer.fire(&AnchorId::for_block(0));
        assert_eq!(tracker.active_anchor(), Some(AnchorId::for_block(0)));
    }

    #[test]
    fn test_unresolvable_anchors_are_skipped() {
        let (mut tracker, observer, _) = tracker();
        observer
            .state
            .borrow_mut()
            .missing
            .insert(AnchorId::for_block(0));

        tracker.set_document(&doc(json!([heading(1, "A"), heading(1, "B")])));

        assert_eq!(observer.live_anchors(), vec![AnchorId::for_block(1)]);
        assert_eq!(tracker.outline().len(), 2);
    }

    #[test]
    fn test_markup_document_has_nothing_to_track() {
        let (mut tracker, observer, _) = tracker();
        tracker.set_document(&Arc::new(Document::markup("<h1>Hi</h1>")));

        assert!(tracker.outline().is_empty());
        assert!(observer.live_anchors().is_empty());
    }

    #[test]
    fn test_scroll_request_uses_header_offset_and_keeps_active() {
        let (tracker, observer, scroller) = tracker();
        let mut tracker = tracker.with_header_offset(64.0);
        tracker.set_document(&doc(json!([heading(1, "A"), heading(1, "B")])));
        observer.fire(&AnchorId::for_block(0));

        tracker.scroll_to_heading(&AnchorId::for_block(1));

        assert_eq!(
            *scroller.requests.borrow(),
            vec![ScrollRequest {
                anchor: AnchorId::for_block(1),
                header_offset: 64.0,
                behavior: ScrollBehavior::Smooth,
            }]
        );
        assert_eq!(tracker.active_anchor(), Some(AnchorId::for_block(0)));
    }

    #[test]
    fn test_scroll_request_takes_host_behavior() {
        #[derive(Default)]
        struct JumpingScroller {
            requests: Vec<ScrollRequest>,
        }

        impl ScrollHost for JumpingScroller {
            fn behavior(&self) -> ScrollBehavior {
                ScrollBehavior::Instant
            }

            fn scroll(&mut self, request: ScrollRequest) {
                self.requests.push(request);
            }
        }

        let mut tracker = ActiveSectionTracker::new(NoopObserver, JumpingScroller::default());
        tracker.scroll_to_heading(&AnchorId::for_block(0));

        let behaviors: Vec<_> = tracker
            .scroll_host_mut()
            .requests
            .iter()
            .map(|request| request.behavior)
            .collect();
        assert_eq!(behaviors, vec![ScrollBehavior::Instant]);
    }

    #[test]
    fn test_change_listener_sees_transitions() {
        let (mut tracker, observer, _) = tracker();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = seen.clone();
            tracker.on_change(move |anchor| seen.borrow_mut().push(anchor.cloned()));
        }

        tracker.set_document(&doc(json!([heading(1, "A"), heading(1, "B")])));
        observer.fire(&AnchorId::for_block(0));
        observer.fire(&AnchorId::for_block(0));
        observer.fire(&AnchorId::for_block(1));
        tracker.set_document(&doc(json!([heading(1, "C")])));

        assert_eq!(
            *seen.borrow(),
            vec![
                Some(AnchorId::for_block(0)),
                Some(AnchorId::for_block(1)),
                None,
            ]
        );
    }

    #[test]
    fn test_dispose_releases_everything() {
        let observer = FakeObserver::default();
        {
            let mut tracker =
                ActiveSectionTracker::new(observer.clone(), RecordingScroller::default());
            tracker.set_document(&doc(json!([heading(1, "A"), heading(2, "B")])));
        }

        assert!(observer.live_anchors().is_empty());
        assert_eq!(observer.events().last(), Some(&Event::DisposeAll));
    }

    #[test]
    fn test_unsupported_host_disables_tracking() {
        let mut tracker = ActiveSectionTracker::new(NoopObserver, RecordingScroller::default());
        tracker.set_document(&doc(json!([heading(1, "A")])));
        tracker.set_document(&doc(json!([heading(1, "B")])));

        assert!(!tracker.is_enabled());
        assert!(tracker.warned_unsupported);
        assert_eq!(tracker.active_anchor(), None);
        assert_eq!(tracker.outline().len(), 1);
    }
}
