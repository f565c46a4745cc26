//! Travel tracker registry.
//!
//! [`TravelTracker`] maps tracked sources to their accumulation state and
//! reports running `(total_x, total_y)` distances through the callback given
//! at registration. One registry instance per owning context; dropping it
//! releases every live subscription.

use crate::geometry::{ContentSize, Offset};
use crate::source::{InsetAdjustment, ScrollSource, SourceId, SubscriptionId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// Options for [`TravelTracker::start_tracking`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackOptions {
    /// Leave the source's inset-adjustment behavior alone. When `false`
    /// (the default) the tracker forces [`InsetAdjustment::Never`] so
    /// offset deltas are not skewed by insets changing dynamically.
    pub respect_inset_adjustment: bool,
}

/// Per-source accumulation state.
///
/// `previous` is the last *accepted* offset, not the last raw notification;
/// a rejected reading leaves it untouched so the next accepted delta is
/// measured from the last position actually counted.
struct TravelState {
    previous: Offset,
    total_x: f32,
    total_y: f32,
}

impl TravelState {
    fn new() -> Self {
        Self {
            previous: Offset::ZERO,
            total_x: 0.0,
            total_y: 0.0,
        }
    }

    /// Applies one offset reading. Returns the updated totals if the reading
    /// was in bounds, `None` if it was rejected.
    fn apply(&mut self, offset: Offset, bounds: ContentSize) -> Option<(f32, f32)> {
        if !bounds.contains(offset) {
            return None;
        }
        self.total_x += (offset.x - self.previous.x).abs();
        self.total_y += (offset.y - self.previous.y).abs();
        self.previous = offset;
        Some((self.total_x, self.total_y))
    }
}

struct TrackedEntry {
    /// Weak so the tracker never keeps a view alive; the host owns it.
    source: Weak<dyn ScrollSource>,
    subscription: SubscriptionId,
}

/// Registry of tracked scroll sources.
///
/// Explicit, constructible object rather than process-wide state: the owning
/// context creates one, passes it to call sites, and drops it to tear down
/// every subscription deterministically. Single-threaded; all notification
/// delivery is assumed serialized by the host.
pub struct TravelTracker {
    entries: RefCell<HashMap<SourceId, TrackedEntry>>,
}

impl TravelTracker {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Starts accumulating travel for `source`, invoking `on_change` with
    /// the updated `(total_x, total_y)` after every accepted offset change.
    ///
    /// Idempotent: if the source is already tracked this is a no-op — the
    /// existing subscription and totals are kept and `on_change` is never
    /// invoked. Unless [`TrackOptions::respect_inset_adjustment`] is set,
    /// the source's inset adjustment is forced to `Never` as a documented
    /// side effect.
    ///
    /// Readings with a negative coordinate or a coordinate beyond the
    /// source's current content size are ignored silently: no state change,
    /// no callback.
    pub fn start_tracking(
        &self,
        source: Rc<dyn ScrollSource>,
        options: TrackOptions,
        on_change: impl Fn(f32, f32) + 'static,
    ) {
        let id = source.source_id();
        if self.entries.borrow().contains_key(&id) {
            log::warn!("source {id:?} is already tracked, keeping existing subscription");
            return;
        }

        if !options.respect_inset_adjustment {
            source.set_inset_adjustment(InsetAdjustment::Never);
        }

        let state = RefCell::new(TravelState::new());
        let weak = Rc::downgrade(&source);
        let subscription = source.subscribe(Box::new(move |offset| {
            // The source may outlive its entry only until the tracker
            // unsubscribes; a dead upgrade means teardown already ran.
            let Some(source) = weak.upgrade() else {
                return;
            };
            let bounds = source.content_size();
            // Borrow ends before the callback runs, so a callback that
            // re-enters the tracker cannot hit a borrow panic.
            let accepted = state.borrow_mut().apply(offset, bounds);
            if let Some((total_x, total_y)) = accepted {
                on_change(total_x, total_y);
            }
        }));

        self.entries.borrow_mut().insert(
            id,
            TrackedEntry {
                source: Rc::downgrade(&source),
                subscription,
            },
        );
        log::debug!("tracking source {id:?} (subscription {subscription:?})");
    }

    /// Stops tracking one source, releasing its subscription. Returns `true`
    /// if the source was tracked. Accumulated totals are discarded.
    pub fn stop_tracking(&self, id: SourceId) -> bool {
        let entry = self.entries.borrow_mut().remove(&id);
        match entry {
            Some(entry) => {
                release(&entry);
                log::debug!("stopped tracking source {id:?}");
                true
            }
            None => false,
        }
    }

    pub fn is_tracking(&self, id: SourceId) -> bool {
        self.entries.borrow().contains_key(&id)
    }

    pub fn tracked_count(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl Default for TravelTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TravelTracker {
    fn drop(&mut self) {
        let mut entries = self.entries.borrow_mut();
        for (id, entry) in entries.drain() {
            release(&entry);
            log::debug!("released subscription for source {id:?} on teardown");
        }
    }
}

fn release(entry: &TrackedEntry) {
    // A source that was dropped already tore its subscriber list down.
    if let Some(source) = entry.source.upgrade() {
        source.unsubscribe(entry.subscription);
    }
}
