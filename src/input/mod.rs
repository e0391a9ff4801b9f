//! Input handling: pointer event types, display → matrix coordinate mapping,
//! the click/drag gesture state machine, and bindable key actions.

/// Platform-agnostic pointer events.
pub mod event;
/// Click vs. drag classification of a press–move–release sequence.
pub mod gesture;
/// Key actions that can be bound in options.
pub mod keyboard;
/// Display-pixel → matrix-index mapping.
pub mod mapping;

pub use event::PointerEvent;
pub use gesture::{
    CompletedGesture, Gesture, GestureClassifier, GestureProgress,
    PointerGesture, DRAG_THRESHOLD_PX,
};
pub use keyboard::KeyAction;
pub use mapping::PointerMapper;
