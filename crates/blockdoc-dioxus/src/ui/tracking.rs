//! Webview host for the active-section tracker.
//!
//! [`WebviewObserver`] drives an `IntersectionObserver` through a long-lived eval bridge and
//! [`WebviewScroller`] scrolls the window with a one-shot script. [`use_section_tracking`]
//! ties both to a component and mirrors the active anchor into a signal.

use blockdoc_engine::tracker::{
    ActiveSectionTracker, ScrollHost, ScrollRequest, SubscriptionId, VisibilityObserver,
    VisibleCallback,
};
use blockdoc_engine::{AnchorId, Document};
use dioxus::document::{self, Eval};
use dioxus::prelude::*;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

const VISIBILITY_BRIDGE_JS: &str = include_str!("../assets/visibility_bridge.js");
const SCROLL_TO_ANCHOR_JS: &str = include_str!("../assets/scroll_to_anchor.js");

pub type WebviewTracker = ActiveSectionTracker<WebviewObserver, WebviewScroller>;

/// Instruction for the webview side of the bridge.
#[derive(Debug, Clone, PartialEq)]
enum BridgeOp {
    /// (Re)bind the anchor to the element currently carrying its id.
    Observe(AnchorId),
    /// Stop watching the anchor.
    Unobserve(AnchorId),
}

impl BridgeOp {
    fn to_message(&self) -> Value {
        match self {
            BridgeOp::Observe(anchor) => {
                json!({ "op": "observe", "anchor": anchor.as_str() })
            }
            BridgeOp::Unobserve(anchor) => {
                json!({ "op": "unobserve", "anchor": anchor.as_str() })
            }
        }
    }
}

/// Live subscriptions by id. Several may share an anchor while documents swap.
#[derive(Default)]
struct SubscriptionRegistry {
    live: BTreeMap<SubscriptionId, (AnchorId, VisibleCallback)>,
    next_id: u64,
}

impl SubscriptionRegistry {
    /// Every subscription rebinds its anchor: a re-rendered document may have replaced the
    /// element behind an id that is already watched.
    fn subscribe(
        &mut self,
        anchor: &AnchorId,
        on_visible: VisibleCallback,
    ) -> (SubscriptionId, BridgeOp) {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.live.insert(id, (anchor.clone(), on_visible));
        (id, BridgeOp::Observe(anchor.clone()))
    }

    /// The anchor is unobserved once its last subscription is gone.
    fn release(&mut self, subscription: SubscriptionId) -> Option<BridgeOp> {
        let (anchor, _) = self.live.remove(&subscription)?;
        if self.live.values().any(|(a, _)| *a == anchor) {
            None
        } else {
            Some(BridgeOp::Unobserve(anchor))
        }
    }

    fn clear(&mut self) {
        self.live.clear();
    }

    fn callbacks_for(&self, anchor: &AnchorId) -> Vec<VisibleCallback> {
        self.live
            .values()
            .filter(|(a, _)| a == anchor)
            .map(|(_, callback)| callback.clone())
            .collect()
    }
}

type Registry = Rc<RefCell<SubscriptionRegistry>>;

/// Visibility observer backed by an `IntersectionObserver` in the webview.
pub struct WebviewObserver {
    bridge: Eval,
    registry: Registry,
}

impl WebviewObserver {
    /// Start the bridge script. Must run inside a component scope.
    pub fn start(header_offset: f64) -> Self {
        let bridge = document::eval(VISIBILITY_BRIDGE_JS);
        let registry = Registry::default();
        spawn(pump_signals(bridge.clone(), registry.clone()));

        let observer = Self { bridge, registry };
        observer.send(json!({ "op": "configure", "offset": header_offset }));
        observer
    }

    fn send(&self, message: Value) {
        if let Err(e) = self.bridge.send(message) {
            log::warn!("visibility bridge unavailable: {e:?}");
        }
    }
}

impl VisibilityObserver for WebviewObserver {
    fn observe(
        &mut self,
        anchor: &AnchorId,
        on_visible: VisibleCallback,
    ) -> Option<SubscriptionId> {
        let (id, op) = self.registry.borrow_mut().subscribe(anchor, on_visible);
        self.send(op.to_message());
        // Element resolution happens in the webview, so every subscription is accepted.
        Some(id)
    }

    fn release(&mut self, subscription: SubscriptionId) {
        let op = self.registry.borrow_mut().release(subscription);
        if let Some(op) = op {
            self.send(op.to_message());
        }
    }

    fn dispose_all(&mut self) {
        self.registry.borrow_mut().clear();
        self.send(json!({ "op": "disconnect" }));
    }
}

async fn pump_signals(mut bridge: Eval, registry: Registry) {
    loop {
        match bridge.recv::<String>().await {
            Ok(raw) => deliver(&registry, &raw),
            Err(e) => {
                log::debug!("visibility bridge closed: {e:?}");
                break;
            }
        }
    }
}

fn deliver(registry: &Registry, raw: &str) {
    let Some(anchor) = AnchorId::parse(raw) else {
        log::warn!("ignoring visibility signal for unknown element {raw:?}");
        return;
    };
    let callbacks = registry.borrow().callbacks_for(&anchor);
    for callback in callbacks {
        callback();
    }
}

/// Scrolls the window so the anchor sits just below the header.
#[derive(Debug, Default)]
pub struct WebviewScroller;

impl ScrollHost for WebviewScroller {
    fn scroll(&mut self, request: ScrollRequest) {
        let script = document::eval(SCROLL_TO_ANCHOR_JS);
        let message = json!({
            "anchor": request.anchor.as_str(),
            "offset": request.header_offset,
            "behavior": request.behavior.as_css(),
        });
        if let Err(e) = script.send(message) {
            log::warn!("could not scroll to {}: {e:?}", request.anchor);
        }
    }
}

/// Component-scoped handle on the tracker.
#[derive(Clone)]
pub struct SectionTracking {
    active: Signal<Option<AnchorId>>,
    tracker: Rc<RefCell<WebviewTracker>>,
}

impl SectionTracking {
    pub fn active(&self) -> Option<AnchorId> {
        self.active.read().clone()
    }

    pub fn scroll_to(&self, anchor: &AnchorId) {
        self.tracker.borrow_mut().scroll_to_heading(anchor);
    }
}

/// Track which heading of `document` is on screen.
///
/// Subscriptions follow the document by identity and are released when the component
/// unmounts.
pub fn use_section_tracking(document: Arc<Document>, header_offset: f64) -> SectionTracking {
    let mut active = use_signal(|| None::<AnchorId>);

    let tracker = use_hook(move || {
        let mut tracker = ActiveSectionTracker::new(
            WebviewObserver::start(header_offset),
            WebviewScroller,
        )
        .with_header_offset(header_offset);
        tracker.on_change(move |anchor| active.set(anchor.cloned()));
        Rc::new(RefCell::new(tracker))
    });

    use_effect(use_reactive((&document,), {
        let tracker = tracker.clone();
        move |(document,)| {
            tracker.borrow_mut().set_document(&document);
        }
    }));

    SectionTracking { active, tracker }
}
