//! Click vs. drag classification.
//!
//! A press–move–release sequence becomes exactly one [`Gesture`] on
//! release. Movement is measured in matrix pixels with the Chebyshev norm
//! (`max(|dx|, |dy|)`); once it exceeds [`DRAG_THRESHOLD_PX`] the gesture is
//! a drag for good, even if the pointer comes back before release.

use glam::Vec2;

/// Movement (matrix pixels) a press may jitter and still count as a click.
pub const DRAG_THRESHOLD_PX: f32 = 5.0;

/// A finalized pointer gesture in matrix-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Press and release without leaving the jitter box.
    Click {
        /// Release position.
        at: Vec2,
    },
    /// Press, movement beyond the jitter box, release.
    Drag {
        /// Press position.
        start: Vec2,
        /// Release position.
        end: Vec2,
    },
}

/// Tracking state of one active press. Discarded on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerGesture {
    /// Press position.
    pub start: Vec2,
    /// Latest pointer position.
    pub current: Vec2,
    /// Sticky flag: movement exceeded the drag threshold at some point.
    pub crossed_drag_threshold: bool,
    /// Structure generation at press time, used to reject stale gestures.
    pub generation: u64,
}

impl PointerGesture {
    /// Start tracking a press at `start`.
    #[must_use]
    pub fn new(start: Vec2, generation: u64) -> Self {
        Self {
            start,
            current: start,
            crossed_drag_threshold: false,
            generation,
        }
    }

    /// Record a new pointer position.
    pub fn track(&mut self, pos: Vec2) {
        self.current = pos;
        let delta = (pos - self.start).abs();
        if delta.max_element() > DRAG_THRESHOLD_PX {
            self.crossed_drag_threshold = true;
        }
    }

    /// Classify the gesture as it stands.
    #[must_use]
    pub fn classify(&self) -> Gesture {
        if self.crossed_drag_threshold {
            Gesture::Drag {
                start: self.start,
                end: self.current,
            }
        } else {
            Gesture::Click { at: self.current }
        }
    }
}

/// What an intermediate pointer move means for the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureProgress {
    /// No button held: plain hover.
    Idle,
    /// Button held, still within the click jitter box.
    Pressed,
    /// Button held and dragging; the host should preview the range.
    Dragging {
        /// Press position.
        start: Vec2,
        /// Latest pointer position.
        current: Vec2,
    },
}

/// A gesture produced by a release, tagged with the generation it began in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedGesture {
    /// The classified gesture.
    pub gesture: Gesture,
    /// Structure generation at press time.
    pub generation: u64,
}

/// Turns raw press/move/release calls into [`Gesture`]s.
///
/// Owns the transient [`PointerGesture`]; nothing outside the classifier
/// mutates it.
#[derive(Debug, Default)]
pub struct GestureClassifier {
    active: Option<PointerGesture>,
}

impl GestureClassifier {
    /// Create an idle classifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a press. A press already in progress is replaced.
    pub fn pointer_down(&mut self, pos: Vec2, generation: u64) {
        self.active = Some(PointerGesture::new(pos, generation));
    }

    /// Track movement. Never emits a gesture.
    pub fn pointer_move(&mut self, pos: Vec2) -> GestureProgress {
        let Some(gesture) = self.active.as_mut() else {
            return GestureProgress::Idle;
        };
        gesture.track(pos);
        if gesture.crossed_drag_threshold {
            GestureProgress::Dragging {
                start: gesture.start,
                current: gesture.current,
            }
        } else {
            GestureProgress::Pressed
        }
    }

    /// Finish the press and classify it. `None` without a matching press.
    pub fn pointer_up(&mut self, pos: Vec2) -> Option<CompletedGesture> {
        let mut gesture = self.active.take()?;
        gesture.track(pos);
        Some(CompletedGesture {
            gesture: gesture.classify(),
            generation: gesture.generation,
        })
    }

    /// Abandon the press without emitting anything.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
