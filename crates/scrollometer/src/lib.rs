//! Accumulated scroll travel tracking.
//!
//! Attaches to scrollable views through the [`ScrollSource`] abstraction and
//! sums the absolute distance traveled along each axis as the view's visible
//! offset changes, reporting running totals through a caller-supplied
//! callback. The [`TravelTracker`] registry owns the subscriptions and
//! releases them deterministically when dropped.

pub mod geometry;
pub mod source;
pub mod tracker;


pub use geometry::{ContentSize, Offset};
pub use source::{InsetAdjustment, ScrollSource, SourceId, SubscriptionId};
pub use tracker::{TrackOptions, TravelTracker};
