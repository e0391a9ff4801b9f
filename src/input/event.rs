/// Platform-agnostic pointer events.
///
/// Coordinates are in display (logical) pixels relative to the top-left of
/// the heatmap surface. The engine scales them into matrix pixels with a
/// [`PointerMapper`](super::PointerMapper).
///
/// # Example
///
/// ```ignore
/// let redraw = engine.handle_pointer(PointerEvent::Move { x: 12.0, y: 40.5 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed.
    Down {
        /// Horizontal position in display pixels.
        x: f32,
        /// Vertical position in display pixels.
        y: f32,
    },
    /// Pointer moved, with or without a button held.
    Move {
        /// Horizontal position in display pixels.
        x: f32,
        /// Vertical position in display pixels.
        y: f32,
    },
    /// Primary button released.
    Up {
        /// Horizontal position in display pixels.
        x: f32,
        /// Vertical position in display pixels.
        y: f32,
    },
    /// Pointer left the surface.
    Leave,
}
