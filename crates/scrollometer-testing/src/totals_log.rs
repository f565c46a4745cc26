//! Recording callback for tracker assertions.

use std::cell::RefCell;
use std::rc::Rc;

/// Records every `(total_x, total_y)` pair a tracker reports.
///
/// Clone-cheap handle: `callback()` returns a closure suitable for
/// `start_tracking` and the log stays readable from the test body.
#[derive(Clone, Default)]
pub struct TotalsLog {
    entries: Rc<RefCell<Vec<(f32, f32)>>>,
}

impl TotalsLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends each report to this log.
    pub fn callback(&self) -> impl Fn(f32, f32) + 'static {
        let entries = self.entries.clone();
        move |total_x, total_y| entries.borrow_mut().push((total_x, total_y))
    }

    pub fn entries(&self) -> Vec<(f32, f32)> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<(f32, f32)> {
        self.entries.borrow().last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
