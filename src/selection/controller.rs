use glam::Vec2;

use super::state::{SelectionEvent, SelectionState};
use crate::input::{Gesture, PointerMapper};
use crate::matrix::AtomIndex;

/// Owns the [`SelectionState`] and applies gestures and hover updates to
/// it.
///
/// Indices beyond the current matrix size are dropped silently; they can
/// only arise when a structure swap races an in-flight gesture.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
    /// Atom count of the matrix the selection refers to.
    matrix_size: usize,
}

impl SelectionController {
    /// Create a controller for an `matrix_size`×`matrix_size` matrix.
    #[must_use]
    pub fn new(matrix_size: usize) -> Self {
        Self {
            state: SelectionState::None,
            matrix_size,
        }
    }

    /// Current selection.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Matrix size the controller validates indices against.
    #[must_use]
    pub fn matrix_size(&self) -> usize {
        self.matrix_size
    }

    /// Rebind to a new matrix. The old selection refers to other atoms, so
    /// it is dropped without notification.
    pub fn reset(&mut self, matrix_size: usize) {
        self.matrix_size = matrix_size;
        self.state = SelectionState::None;
    }

    fn in_bounds(&self, index: AtomIndex) -> bool {
        index < self.matrix_size
    }

    /// Apply a finalized gesture, mapping its coordinates through `mapper`.
    ///
    /// Clicks outside the raster are ignored; drag endpoints are clamped
    /// onto it.
    pub fn apply_gesture(
        &mut self,
        gesture: Gesture,
        mapper: &PointerMapper,
    ) -> Option<SelectionEvent> {
        match gesture {
            Gesture::Click { at } => {
                let (col, row) = mapper.index_of(at)?;
                self.click(row, col)
            }
            Gesture::Drag { start, end } => {
                let (col0, _) = mapper.clamped_index_of(start)?;
                let (col1, _) = mapper.clamped_index_of(end)?;
                self.drag(col0, col1)
            }
        }
    }

    /// Pick a cell. Picking the currently selected cell again clears it.
    pub fn click(
        &mut self,
        row: AtomIndex,
        col: AtomIndex,
    ) -> Option<SelectionEvent> {
        if !self.in_bounds(row) || !self.in_bounds(col) {
            log::trace!("discarding click on ({row}, {col}): out of range");
            return None;
        }
        if self.state == (SelectionState::Point { row, col }) {
            self.state = SelectionState::None;
            log::trace!("selection: point ({row}, {col}) toggled off");
            return Some(SelectionEvent::Cleared);
        }
        self.state = SelectionState::Point { row, col };
        log::trace!("selection: point ({row}, {col})");
        Some(SelectionEvent::PointSelected { row, col })
    }

    /// Select the column span between two drag endpoints. The vertical
    /// extent of the drag is irrelevant.
    pub fn drag(
        &mut self,
        col0: AtomIndex,
        col1: AtomIndex,
    ) -> Option<SelectionEvent> {
        if !self.in_bounds(col0) || !self.in_bounds(col1) {
            log::trace!("discarding drag {col0}..{col1}: out of range");
            return None;
        }
        let (start, end) = (col0.min(col1), col0.max(col1));
        self.state = SelectionState::Range { start, end };
        log::trace!("selection: range [{start}, {end}]");
        Some(SelectionEvent::RangeSelected { start, end })
    }

    /// Update hover feedback. Only replaces an empty or hover state; a
    /// committed point or range stays put. Returns whether the state
    /// changed. Never produces an event.
    pub fn hover(&mut self, index: Option<AtomIndex>) -> bool {
        if self.state.is_committed() {
            return false;
        }
        let next = match index {
            Some(i) if self.in_bounds(i) => SelectionState::Hover(i),
            _ => SelectionState::None,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }

    /// Hover at a matrix-pixel position; the column is the hovered atom.
    pub fn hover_at(&mut self, point: Vec2, mapper: &PointerMapper) -> bool {
        self.hover(mapper.index_of(point).map(|(col, _)| col))
    }

    /// Drop any committed selection.
    pub fn clear(&mut self) -> Option<SelectionEvent> {
        let was_committed = self.state.is_committed();
        self.state = SelectionState::None;
        was_committed.then_some(SelectionEvent::Cleared)
    }

    /// Provisional range shown while a drag is still in progress.
    #[must_use]
    pub fn preview_range(
        start: Vec2,
        current: Vec2,
        mapper: &PointerMapper,
    ) -> Option<SelectionState> {
        let (col0, _) = mapper.clamped_index_of(start)?;
        let (col1, _) = mapper.clamped_index_of(current)?;
        Some(SelectionState::range(col0, col1))
    }
}
