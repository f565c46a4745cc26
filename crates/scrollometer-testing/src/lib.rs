//! Testing utilities for scrollometer.
//!
//! Provides [`MockScrollView`], a fully scriptable
//! [`scrollometer::ScrollSource`] for driving a
//! [`scrollometer::TravelTracker`] without a real view, and [`TotalsLog`],
//! a recording callback for asserting on reported totals.

pub mod mock_view;
pub mod totals_log;

#[cfg(test)]
mod tests;

pub use mock_view::MockScrollView;
pub use totals_log::TotalsLog;
