use std::rc::Rc;

use crate::anchors::AnchorId;

/// Callback invoked when the observed anchor enters the visible region.
pub type VisibleCallback = Rc<dyn Fn()>;

/// Handle of one visibility subscription, issued by the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Viewport-visibility capability provided by the host environment.
///
/// Callbacks are delivered on the host's single UI thread, one at a time.
pub trait VisibilityObserver {
    /// Whether the host can observe visibility at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// Start observing the rendered element carrying `anchor`.
    ///
    /// Returns `None` when the host cannot resolve such an element.
    fn observe(&mut self, anchor: &AnchorId, on_visible: VisibleCallback)
    -> Option<SubscriptionId>;

    /// Stop one subscription. Unknown ids are ignored.
    fn release(&mut self, subscription: SubscriptionId);

    /// Stop every subscription this observer holds.
    fn dispose_all(&mut self);
}

/// Observer for hosts without visibility observation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl VisibilityObserver for NoopObserver {
    fn is_supported(&self) -> bool {
        false
    }

    fn observe(
        &mut self,
        _anchor: &AnchorId,
        _on_visible: VisibleCallback,
    ) -> Option<SubscriptionId> {
        None
    }

    fn release(&mut self, _subscription: SubscriptionId) {}

    fn dispose_all(&mut self) {}
}
