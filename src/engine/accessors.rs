//! Read-only accessors for ContactMapEngine

use std::sync::Arc;

use super::ContactMapEngine;
use crate::matrix::{AtomCoordinate, DistanceMatrix};
use crate::options::Options;
use crate::selection::SelectionState;

impl ContactMapEngine {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Contact threshold (Å).
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.options.contact.threshold
    }

    /// Coordinates of the loaded structure.
    #[must_use]
    pub fn atoms(&self) -> &Arc<[AtomCoordinate]> {
        &self.atoms
    }

    /// Number of atoms in the loaded structure (= raster edge length).
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Distance matrix of the loaded structure.
    #[must_use]
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Structure generation, bumped on every load.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Committed selection (hover, point, range or none).
    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    /// Whether a press is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.gestures.is_pressed()
    }

    /// Whether a range listener is installed.
    #[must_use]
    pub fn has_range_listener(&self) -> bool {
        self.bridge.has_listener()
    }
}
