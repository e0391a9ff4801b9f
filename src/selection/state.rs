use crate::matrix::AtomIndex;

/// Current selection on the contact matrix. Exactly one variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionState {
    /// Nothing selected or hovered.
    #[default]
    None,
    /// Pointer resting over an atom column (visual feedback only).
    Hover(AtomIndex),
    /// A single picked cell.
    Point {
        /// Matrix row (atom index).
        row: AtomIndex,
        /// Matrix column (atom index).
        col: AtomIndex,
    },
    /// A contiguous span of atom columns, `start <= end`, full height.
    Range {
        /// First selected column.
        start: AtomIndex,
        /// Last selected column (inclusive).
        end: AtomIndex,
    },
}

impl SelectionState {
    /// Whether this is a committed selection (point or range) rather than
    /// empty/hover.
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Point { .. } | Self::Range { .. })
    }

    /// Ordered range over two columns.
    #[must_use]
    pub fn range(a: AtomIndex, b: AtomIndex) -> Self {
        Self::Range {
            start: a.min(b),
            end: a.max(b),
        }
    }
}

/// A committed selection change, emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A cell was picked.
    PointSelected {
        /// Matrix row (atom index).
        row: AtomIndex,
        /// Matrix column (atom index).
        col: AtomIndex,
    },
    /// A column span was selected by dragging.
    RangeSelected {
        /// First selected column.
        start: AtomIndex,
        /// Last selected column (inclusive).
        end: AtomIndex,
    },
    /// A committed selection was dropped.
    Cleared,
}
