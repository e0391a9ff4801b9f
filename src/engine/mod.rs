//! The contact-matrix engine: one instance per displayed structure.
//!
//! [`ContactMapEngine`] owns the distance matrix, the memoized heatmap and
//! overlay, and the selection state machine. Hosts feed it atom
//! coordinates, pointer events and display sizes; it hands back the
//! composited image and calls the range listener when a drag completes.
//!
//! # Caching
//!
//! Two independent memos keep redraws cheap:
//!
//! - the heatmap is rebuilt only when the structure generation or the
//!   threshold changes;
//! - the overlay composition is rebuilt only when the heatmap or the
//!   displayed selection (committed state or drag preview) changes.
//!
//! # Threading
//!
//! The engine is single-threaded and not `Sync`; all calls come from the
//! host's UI thread. Matrix and heatmap computation run synchronously.

mod accessors;
mod input;

use std::sync::Arc;

use glam::Vec2;
use web_time::Instant;

use crate::error::ContactMapError;
use crate::input::{GestureClassifier, PointerMapper};
use crate::matrix::{AtomCoordinate, AtomIndex, DistanceMatrix};
use crate::options::Options;
use crate::overlay::{self, Composition};
use crate::raster::{self, HeatmapImage};
use crate::selection::{
    SelectionController, SelectionEventBridge, SelectionState,
};
use crate::util::memo::Memo;

/// Change-detection key for the heatmap cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeatmapKey {
    generation: u64,
    threshold_bits: u32,
}

/// Change-detection key for the overlay cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CompositeKey {
    heatmap: HeatmapKey,
    displayed: SelectionState,
    style_revision: u64,
}

/// Interactive contact matrix for one structure.
///
/// # Example
///
/// ```
/// use contact_matrix::engine::ContactMapEngine;
/// use contact_matrix::input::PointerEvent;
/// use contact_matrix::options::Options;
/// use glam::Vec3;
///
/// // A 20-residue CA trace along x, 3.8 Å apart
/// let atoms: Vec<Vec3> =
///     (0..20).map(|i| Vec3::X * (i as f32 * 3.8)).collect();
///
/// let mut engine = ContactMapEngine::new(Options::default());
/// engine.load_atoms(atoms).unwrap();
/// engine.set_on_range_selected(|[start, end]| {
///     assert_eq!((start, end), (2, 12));
/// });
/// let _ = engine.handle_pointer(PointerEvent::Down { x: 12.5, y: 4.0 });
/// let _ = engine.handle_pointer(PointerEvent::Move { x: 6.0, y: 4.0 });
/// let _ = engine.handle_pointer(PointerEvent::Up { x: 2.5, y: 4.0 });
/// let image = engine.composite().flatten();
/// assert_eq!(image.size(), 20);
/// ```
pub struct ContactMapEngine {
    options: Options,
    atoms: Arc<[AtomCoordinate]>,
    matrix: DistanceMatrix,
    /// Bumped on every structure swap.
    generation: u64,
    /// Bumped whenever overlay styling options change.
    style_revision: u64,
    heatmap: Memo<HeatmapKey, Arc<HeatmapImage>>,
    composite: Memo<CompositeKey, Composition>,
    mapper: PointerMapper,
    gestures: GestureClassifier,
    selection: SelectionController,
    bridge: SelectionEventBridge,
    /// Provisional range shown while a drag is in progress.
    drag_preview: Option<SelectionState>,
}

impl ContactMapEngine {
    /// Create an engine with no structure loaded.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            options,
            atoms: Arc::from(Vec::new()),
            matrix: DistanceMatrix::default(),
            generation: 0,
            style_revision: 0,
            heatmap: Memo::new(),
            composite: Memo::new(),
            mapper: PointerMapper::new(Vec2::ZERO, 0),
            gestures: GestureClassifier::new(),
            selection: SelectionController::new(0),
            bridge: SelectionEventBridge::new(),
            drag_preview: None,
        }
    }

    /// Replace the structure.
    ///
    /// Rejects structures above `contact.max_atoms` with
    /// [`ContactMapError::TooManyAtoms`], and structures whose matrix or
    /// heatmap cannot be allocated with
    /// [`ContactMapError::AllocationFailed`]; on error the previous
    /// structure, caches and selection are kept. On success the selection
    /// is reset and any gesture still in flight will be discarded on
    /// release.
    pub fn load_atoms(
        &mut self,
        atoms: impl Into<Arc<[AtomCoordinate]>>,
    ) -> Result<(), ContactMapError> {
        let atoms = atoms.into();
        let start = Instant::now();
        let result = DistanceMatrix::compute_bounded(
            &atoms,
            self.options.contact.max_atoms,
        )
        .and_then(|matrix| {
            let heatmap = raster::try_rasterize(
                &matrix,
                self.options.contact.threshold,
            )?;
            Ok((matrix, heatmap))
        });
        let (matrix, heatmap) = result
            .inspect_err(|e| log::warn!("rejected structure load: {e}"))?;

        let non_finite = atoms.iter().filter(|a| !a.is_finite()).count();
        if non_finite > 0 {
            log::warn!(
                "{non_finite} atoms have non-finite coordinates; treating \
                 them as out of contact"
            );
        }

        let n = atoms.len();
        self.atoms = atoms;
        self.matrix = matrix;
        self.generation = self.generation.wrapping_add(1);
        // Rasterized up front so the raster allocation can fail here
        let key = self.heatmap_key();
        let _ = self.heatmap.get_or_compute(key, || Arc::new(heatmap));
        self.composite.invalidate();
        self.mapper.set_raster_size(n);
        self.selection.reset(n);
        self.drag_preview = None;

        log::info!(
            "loaded {n} atoms ({:.1} ms)",
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    /// Unload the structure, leaving an empty matrix.
    pub fn clear_structure(&mut self) {
        self.atoms = Arc::from(Vec::new());
        self.matrix = DistanceMatrix::default();
        self.generation = self.generation.wrapping_add(1);
        self.heatmap.invalidate();
        self.composite.invalidate();
        self.mapper.set_raster_size(0);
        self.selection.reset(0);
        self.drag_preview = None;
    }

    /// Change the contact threshold (Å). Returns whether it changed.
    ///
    /// Zero or negative thresholds are accepted and render all white.
    pub fn set_threshold(&mut self, threshold: f32) -> bool {
        if threshold.to_bits() == self.options.contact.threshold.to_bits() {
            return false;
        }
        log::debug!("threshold -> {threshold} Å");
        self.options.contact.threshold = threshold;
        true
    }

    /// Replace the options. Threshold and overlay changes take effect on
    /// the next redraw; a lower `max_atoms` only applies to future loads.
    pub fn set_options(&mut self, options: Options) {
        if options.overlay != self.options.overlay {
            self.style_revision = self.style_revision.wrapping_add(1);
        }
        self.options = options;
    }

    /// Set the logical size of the host's drawing surface, used to scale
    /// pointer positions onto the raster.
    pub fn set_display_size(&mut self, width: f32, height: f32) {
        self.mapper.set_display_size(Vec2::new(width, height));
    }

    /// Install the `onRangeSelected` listener. Only completed drags are
    /// forwarded; point picks are rendered but not reported.
    pub fn set_on_range_selected(
        &mut self,
        callback: impl FnMut([AtomIndex; 2]) + 'static,
    ) {
        self.bridge.set_on_range_selected(callback);
    }

    /// Remove the range listener.
    pub fn clear_range_listener(&mut self) {
        self.bridge.clear_listener();
    }

    fn heatmap_key(&self) -> HeatmapKey {
        HeatmapKey {
            generation: self.generation,
            threshold_bits: self.options.contact.threshold.to_bits(),
        }
    }

    /// Selection as currently drawn: the drag preview while dragging,
    /// otherwise the committed state.
    #[must_use]
    pub fn displayed_selection(&self) -> SelectionState {
        self.drag_preview.unwrap_or_else(|| self.selection.state())
    }

    /// The heatmap for the current structure and threshold, rasterized on
    /// first use after either changes.
    pub fn heatmap(&mut self) -> Arc<HeatmapImage> {
        let key = self.heatmap_key();
        let matrix = &self.matrix;
        let threshold = self.options.contact.threshold;
        let image = self.heatmap.get_or_compute(key, || {
            let start = Instant::now();
            let image = raster::rasterize(matrix, threshold);
            log::debug!(
                "rasterized {n}×{n} heatmap at {threshold} Å ({:.1} ms)",
                start.elapsed().as_secs_f64() * 1000.0,
                n = image.size()
            );
            Arc::new(image)
        });
        Arc::clone(image)
    }

    /// The heatmap with the current selection overlaid. Recomposited only
    /// when the heatmap or displayed selection changed.
    pub fn composite(&mut self) -> &Composition {
        let heatmap = self.heatmap();
        let key = CompositeKey {
            heatmap: self.heatmap_key(),
            displayed: self.displayed_selection(),
            style_revision: self.style_revision,
        };
        let atoms = &self.atoms;
        let style = &self.options.overlay;
        self.composite.get_or_compute(key, || {
            overlay::compose(&heatmap, key.displayed, atoms, style)
        })
    }
}

impl Default for ContactMapEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
