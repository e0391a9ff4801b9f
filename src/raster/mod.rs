//! Heatmap rasterization of a [`DistanceMatrix`].
//!
//! One RGBA pixel per matrix cell, white → red by proximity. Cells at or
//! beyond the contact threshold are opaque white; closer cells ramp toward
//! pure red as the distance approaches zero. The diagonal (an atom paired
//! with itself) is not a contact and stays white.

use crate::error::ContactMapError;
use crate::matrix::DistanceMatrix;

/// Opaque white, used for out-of-contact cells.
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// An N×N RGBA raster, one pixel per matrix cell, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeatmapImage {
    size: usize,
    pixels: Vec<[u8; 4]>,
}

impl HeatmapImage {
    /// Create a `size`×`size` image filled with `color`.
    #[must_use]
    pub fn filled(size: usize, color: [u8; 4]) -> Self {
        Self {
            size,
            pixels: vec![color; size * size],
        }
    }

    /// Like [`filled`](Self::filled), but reports
    /// [`ContactMapError::AllocationFailed`] instead of aborting when the
    /// buffer cannot be sized or reserved.
    pub fn try_filled(
        size: usize,
        color: [u8; 4],
    ) -> Result<Self, ContactMapError> {
        let cells = size
            .checked_mul(size)
            .ok_or(ContactMapError::AllocationFailed { cells: usize::MAX })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(cells)
            .map_err(|_| ContactMapError::AllocationFailed { cells })?;
        pixels.resize(cells, color);
        Ok(Self { size, pixels })
    }

    /// Width and height in pixels.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Pixel at column `x`, row `y`.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        (x < self.size && y < self.size).then(|| self.pixels[y * self.size + x])
    }

    /// Mutable pixel at column `x`, row `y`.
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8; 4]> {
        if x < self.size && y < self.size {
            Some(&mut self.pixels[y * self.size + x])
        } else {
            None
        }
    }

    /// Pixels as `[r, g, b, a]` quads, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Flat RGBA byte buffer, ready for a canvas `ImageData` or texture
    /// upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Color for a single cell at `distance` under `threshold`.
///
/// Callers must ensure `threshold > 0`.
#[inline]
fn contact_color(distance: f32, threshold: f32) -> [u8; 4] {
    if distance < threshold {
        let intensity =
            (((threshold - distance) / threshold) * 255.0).floor() as u8;
        [255, 255 - intensity, 255 - intensity, 255]
    } else {
        WHITE
    }
}

/// Rasterize `matrix` into a white → red heatmap.
///
/// Deterministic: identical inputs give byte-identical images. A threshold
/// that is zero, negative or NaN yields an all-white image.
#[must_use]
pub fn rasterize(matrix: &DistanceMatrix, threshold: f32) -> HeatmapImage {
    let mut image = HeatmapImage::filled(matrix.size(), WHITE);
    paint_contacts(&mut image, matrix, threshold);
    image
}

/// [`rasterize`] with a fallible pixel allocation, for structure loads
/// where the raster size is not yet known to fit.
pub fn try_rasterize(
    matrix: &DistanceMatrix,
    threshold: f32,
) -> Result<HeatmapImage, ContactMapError> {
    let mut image = HeatmapImage::try_filled(matrix.size(), WHITE)?;
    paint_contacts(&mut image, matrix, threshold);
    Ok(image)
}

/// Color the off-diagonal cells of an all-white `image`.
fn paint_contacts(
    image: &mut HeatmapImage,
    matrix: &DistanceMatrix,
    threshold: f32,
) {
    if threshold.is_nan() || threshold <= 0.0 {
        return;
    }
    let size = image.size;
    let cells = image.pixels.iter_mut().zip(matrix.as_slice()).enumerate();
    for (cell, (px, &d)) in cells {
        if cell / size != cell % size {
            *px = contact_color(d, threshold);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn tetrahedron() -> DistanceMatrix {
        DistanceMatrix::compute(&[Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z])
    }

    #[test]
    fn tetrahedron_contacts_are_red_diagonal_is_white() {
        let img = rasterize(&tetrahedron(), 1.5);
        assert_eq!(img.size(), 4);
        for i in 0..4 {
            assert_eq!(img.pixel(i, i), Some(WHITE));
            for j in 0..4 {
                if i != j {
                    let px = img.pixel(i, j).unwrap();
                    assert_ne!(px, WHITE);
                    assert_eq!(px, img.pixel(j, i).unwrap());
                }
            }
        }
        // d = 1: floor((0.5 / 1.5) * 255) = 85
        assert_eq!(img.pixel(1, 0), Some([255, 170, 170, 255]));
    }

    #[test]
    fn coincident_atoms_saturate_to_red() {
        let m = DistanceMatrix::compute(&[Vec3::ONE, Vec3::ONE]);
        let img = rasterize(&m, 4.0);
        assert_eq!(img.pixel(0, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn cells_at_or_beyond_threshold_are_white() {
        let img = rasterize(&tetrahedron(), 1.0);
        assert_eq!(img.pixel(0, 1), Some(WHITE));
        assert_eq!(img.pixel(2, 3), Some(WHITE));
    }

    #[test]
    fn zero_threshold_is_all_white() {
        let img = rasterize(&tetrahedron(), 0.0);
        assert!(img.pixels().iter().all(|&px| px == WHITE));
        let img = rasterize(&tetrahedron(), -3.0);
        assert!(img.pixels().iter().all(|&px| px == WHITE));
    }

    #[test]
    fn rasterization_is_deterministic() {
        let m = DistanceMatrix::compute(&[
            Vec3::new(0.3, 1.7, -2.0),
            Vec3::new(5.5, 0.1, 0.9),
            Vec3::new(-1.0, -1.0, 4.4),
        ]);
        let a = rasterize(&m, 10.0);
        let b = rasterize(&m, 10.0);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn byte_view_is_rgba_row_major() {
        let img = rasterize(&tetrahedron(), 1.5);
        let bytes = img.as_bytes();
        assert_eq!(bytes.len(), 4 * 4 * 4);
        assert_eq!(&bytes[..4], &WHITE);
        // (col 1, row 0): d = 1
        assert_eq!(&bytes[4..8], &[255, 170, 170, 255]);
    }

    #[test]
    fn fallible_rasterize_matches_infallible() {
        let m = tetrahedron();
        assert_eq!(try_rasterize(&m, 1.5).unwrap(), rasterize(&m, 1.5));
        let white = try_rasterize(&m, 0.0).unwrap();
        assert!(white.pixels().iter().all(|&px| px == WHITE));
    }

    #[test]
    fn unallocatable_raster_is_reported() {
        // size² overflows usize
        let err = HeatmapImage::try_filled(usize::MAX, WHITE).unwrap_err();
        assert!(matches!(
            err,
            ContactMapError::AllocationFailed { cells: usize::MAX }
        ));

        // size² fits in usize but the byte count does not
        let size = 1_usize << (usize::BITS / 2 - 1);
        let err = HeatmapImage::try_filled(size, WHITE).unwrap_err();
        assert!(matches!(
            err,
            ContactMapError::AllocationFailed { cells } if cells == size * size
        ));
    }

    #[test]
    fn empty_matrix_gives_empty_image() {
        let img = rasterize(&DistanceMatrix::compute(&[]), 10.0);
        assert!(img.is_empty());
        assert!(img.as_bytes().is_empty());
    }
}
