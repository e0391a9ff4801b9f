use glam::Vec2;

use crate::matrix::AtomIndex;

/// Maps display-pixel pointer positions onto the N×N heatmap raster.
///
/// The raster is drawn at one pixel per atom, but the host may show it at
/// any logical size (CSS scaling, HiDPI). Positions are scaled by
/// `raster_size / display_size` per axis, then floored to a cell index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    /// Logical size of the drawing surface (width, height).
    display_size: Vec2,
    /// Raster edge length in pixels (= atom count).
    raster_size: usize,
}

impl PointerMapper {
    /// Create a mapper for an `raster_size`×`raster_size` raster shown at
    /// `display_size` logical pixels.
    #[must_use]
    pub fn new(display_size: Vec2, raster_size: usize) -> Self {
        Self {
            display_size,
            raster_size,
        }
    }

    /// Update the logical surface size (after a host resize).
    pub fn set_display_size(&mut self, display_size: Vec2) {
        self.display_size = display_size;
    }

    /// Update the raster size (after a structure swap).
    pub fn set_raster_size(&mut self, raster_size: usize) {
        self.raster_size = raster_size;
    }

    /// Canvas-to-backing-store scale per axis. An unsized (zero or
    /// non-finite) display axis maps 1:1.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        let n = self.raster_size as f32;
        let axis = |display: f32| {
            if display.is_finite() && display > 0.0 {
                n / display
            } else {
                1.0
            }
        };
        Vec2::new(axis(self.display_size.x), axis(self.display_size.y))
    }

    /// Convert a display-pixel position into matrix-pixel coordinates.
    #[must_use]
    pub fn to_matrix_space(&self, display: Vec2) -> Vec2 {
        display * self.scale()
    }

    /// Cell `(col, row)` under a matrix-pixel position, or `None` when it
    /// falls outside the raster.
    #[must_use]
    pub fn index_of(&self, point: Vec2) -> Option<(AtomIndex, AtomIndex)> {
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = point.x.floor() as usize;
        let row = point.y.floor() as usize;
        (col < self.raster_size && row < self.raster_size).then_some((col, row))
    }

    /// Cell `(col, row)` under a matrix-pixel position, clamped into the
    /// raster. `None` only when the raster is empty.
    #[must_use]
    pub fn clamped_index_of(
        &self,
        point: Vec2,
    ) -> Option<(AtomIndex, AtomIndex)> {
        let last = self.raster_size.checked_sub(1)?;
        let clamp = |v: f32| {
            if v.is_nan() || v <= 0.0 {
                0
            } else {
                (v.floor() as usize).min(last)
            }
        };
        Some((clamp(point.x), clamp(point.y)))
    }
}
