use std::fmt;

use super::state::SelectionEvent;
use crate::matrix::AtomIndex;

/// Host callback receiving an ordered `[start, end]` column range.
pub type RangeCallback = Box<dyn FnMut([AtomIndex; 2])>;

/// Forwards selection events to the host application.
///
/// Only range selections leave the engine. Point picks and clears are
/// rendered but not forwarded.
#[derive(Default)]
pub struct SelectionEventBridge {
    on_range_selected: Option<RangeCallback>,
}

impl SelectionEventBridge {
    /// Create a bridge with no listener.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the `onRangeSelected` listener, replacing any previous one.
    pub fn set_on_range_selected(
        &mut self,
        callback: impl FnMut([AtomIndex; 2]) + 'static,
    ) {
        self.on_range_selected = Some(Box::new(callback));
    }

    /// Remove the listener.
    pub fn clear_listener(&mut self) {
        self.on_range_selected = None;
    }

    /// Whether a listener is installed.
    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.on_range_selected.is_some()
    }

    /// Deliver `event`. Returns `true` if a listener was invoked.
    pub fn dispatch(&mut self, event: SelectionEvent) -> bool {
        match event {
            SelectionEvent::RangeSelected { start, end } => {
                if let Some(callback) = self.on_range_selected.as_mut() {
                    callback([start, end]);
                    true
                } else {
                    false
                }
            }
            SelectionEvent::PointSelected { .. } | SelectionEvent::Cleared => {
                log::trace!("not forwarded: {event:?}");
                false
            }
        }
    }
}

impl fmt::Debug for SelectionEventBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionEventBridge")
            .field("has_listener", &self.has_listener())
            .finish()
    }
}
