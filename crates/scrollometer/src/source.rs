//! Scroll source abstraction.
//!
//! [`ScrollSource`] is the capability a scrollable view must expose for the
//! tracker to observe it: a readable offset and content size, a mutable
//! inset-adjustment flag, and an offset-change subscription stream. Keeping
//! the tracker behind this trait decouples it from any concrete view type
//! and lets tests drive it with a mock.

use crate::geometry::{ContentSize, Offset};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity for a scrollable view.
///
/// Used as the tracker's map key instead of the view object itself; views
/// are mutable, identity-bearing objects and make poor hash keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(u64);

impl SourceId {
    /// Allocates a fresh process-unique id. Sources call this once at
    /// construction and return the same value from `source_id` thereafter.
    pub fn next() -> Self {
        SourceId(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Opaque handle to an active offset-change subscription.
///
/// Allocated by the source implementation; the tracker only stores it and
/// hands it back to `unsubscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub const fn new(raw: u64) -> Self {
        SubscriptionId(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// How a view adjusts its offset for safe-area insets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsetAdjustment {
    /// The view shifts its offset as insets change. Host default.
    Automatic,
    /// The view never adjusts; offsets are geometrically predictable.
    Never,
}

impl Default for InsetAdjustment {
    fn default() -> Self {
        InsetAdjustment::Automatic
    }
}

/// Capability exposed by a scrollable view.
///
/// Delivery contract: subscribers for one source are invoked serially, in
/// delivery order, on the caller's thread. The tracker relies on this and
/// takes no locks of its own.
pub trait ScrollSource {
    /// Stable identity of this source. Must not change over its lifetime.
    fn source_id(&self) -> SourceId;

    /// Current visible offset.
    fn offset(&self) -> Offset;

    /// Current content size. Read at each notification, not cached, so a
    /// source whose content grows keeps accepting the larger offsets.
    fn content_size(&self) -> ContentSize;

    fn inset_adjustment(&self) -> InsetAdjustment;

    fn set_inset_adjustment(&self, behavior: InsetAdjustment);

    /// Registers an offset-change callback and returns its handle.
    fn subscribe(&self, on_change: Box<dyn Fn(Offset)>) -> SubscriptionId;

    /// Removes a previously registered callback. Unknown handles are a no-op.
    fn unsubscribe(&self, subscription: SubscriptionId);
}
