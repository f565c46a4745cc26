//! Scriptable mock scroll source.

use scrollometer::{ContentSize, InsetAdjustment, Offset, ScrollSource, SourceId, SubscriptionId};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// A scriptable scrollable view for tests.
///
/// `set_offset` stores the new offset and notifies subscribers in
/// subscription order, emulating a host toolkit's serialized property-change
/// delivery. Content size and inset adjustment are mutable so tests can
/// model growing content and inset-respecting hosts.
pub struct MockScrollView {
    id: SourceId,
    offset: Cell<Offset>,
    content_size: Cell<ContentSize>,
    inset_adjustment: Cell<InsetAdjustment>,
    // BTreeMap keyed by a monotonic id keeps delivery in subscription order.
    subscribers: RefCell<BTreeMap<u64, Box<dyn Fn(Offset)>>>,
    next_subscription: Cell<u64>,
}

impl MockScrollView {
    pub fn new(content_size: ContentSize) -> Rc<Self> {
        Rc::new(Self {
            id: SourceId::next(),
            offset: Cell::new(Offset::ZERO),
            content_size: Cell::new(content_size),
            inset_adjustment: Cell::new(InsetAdjustment::default()),
            subscribers: RefCell::new(BTreeMap::new()),
            next_subscription: Cell::new(1),
        })
    }

    /// Moves the view to `offset` and fires every subscriber with it.
    pub fn set_offset(&self, offset: Offset) {
        self.offset.set(offset);
        for subscriber in self.subscribers.borrow().values() {
            subscriber(offset);
        }
    }

    /// Replays a sequence of offsets in order.
    pub fn scroll_through(&self, offsets: &[Offset]) {
        for &offset in offsets {
            self.set_offset(offset);
        }
    }

    pub fn set_content_size(&self, content_size: ContentSize) {
        self.content_size.set(content_size);
    }

    /// Number of live subscriptions; drops to zero after tracker teardown.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

impl ScrollSource for MockScrollView {
    fn source_id(&self) -> SourceId {
        self.id
    }

    fn offset(&self) -> Offset {
        self.offset.get()
    }

    fn content_size(&self) -> ContentSize {
        self.content_size.get()
    }

    fn inset_adjustment(&self) -> InsetAdjustment {
        self.inset_adjustment.get()
    }

    fn set_inset_adjustment(&self, behavior: InsetAdjustment) {
        self.inset_adjustment.set(behavior);
    }

    fn subscribe(&self, on_change: Box<dyn Fn(Offset)>) -> SubscriptionId {
        let raw = self.next_subscription.get();
        self.next_subscription.set(raw + 1);
        self.subscribers.borrow_mut().insert(raw, on_change);
        SubscriptionId::new(raw)
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        self.subscribers.borrow_mut().remove(&subscription.raw());
    }
}
