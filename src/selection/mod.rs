//! Selection state and the controller that owns its transitions.
//!
//! [`SelectionController`] is the only thing that changes the
//! [`SelectionState`]. Committed changes (point pick, range drag, clear)
//! come out as [`SelectionEvent`]s; the [`SelectionEventBridge`] decides
//! which of those reach the host.

mod bridge;
mod controller;
mod state;

pub use bridge::{RangeCallback, SelectionEventBridge};
pub use controller::SelectionController;
pub use state::{SelectionEvent, SelectionState};
