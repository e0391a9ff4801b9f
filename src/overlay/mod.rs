//! Selection overlays on top of the cached heatmap.
//!
//! [`compose`] is pure: it never touches the heatmap, it returns a
//! [`Composition`] that pairs a shared handle to the raster with a list of
//! [`Overlay`] primitives. Hosts either draw the primitives themselves or
//! call [`Composition::flatten`] for a ready-to-blit raster (text labels
//! are always left to the host's text renderer).

use std::sync::Arc;

use crate::matrix::{pair_distance, AtomCoordinate, AtomIndex};
use crate::options::OverlayOptions;
use crate::raster::HeatmapImage;
use crate::selection::SelectionState;

/// A single overlay primitive in raster pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// Full-height line at `col` plus full-width line at `row`.
    Crosshair {
        /// Matrix row.
        row: AtomIndex,
        /// Matrix column.
        col: AtomIndex,
        /// Line color (RGBA).
        color: [u8; 4],
    },
    /// Live distance readout for a picked cell, e.g. `"3.81 Å"`.
    DistanceLabel {
        /// Matrix row.
        row: AtomIndex,
        /// Matrix column.
        col: AtomIndex,
        /// Formatted distance.
        text: String,
    },
    /// Translucent full-height band over columns `start..=end`.
    RangeBand {
        /// First column.
        start: AtomIndex,
        /// Last column (inclusive).
        end: AtomIndex,
        /// Band fill (RGBA, usually translucent).
        fill: [u8; 4],
        /// Solid border color (RGBA).
        border: [u8; 4],
    },
    /// Highlight of the hovered atom column.
    HoverHighlight {
        /// Hovered column.
        index: AtomIndex,
        /// Highlight color (RGBA).
        color: [u8; 4],
    },
}

/// The heatmap plus the overlays to draw on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    base: Arc<HeatmapImage>,
    overlays: Vec<Overlay>,
}

impl Composition {
    /// The untouched cached heatmap.
    #[must_use]
    pub fn base(&self) -> &HeatmapImage {
        &self.base
    }

    /// Overlay primitives in draw order.
    #[must_use]
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// The distance label text, if a point is selected.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.overlays.iter().find_map(|o| match o {
            Overlay::DistanceLabel { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Paint all geometric overlays into a copy of the heatmap.
    #[must_use]
    pub fn flatten(&self) -> HeatmapImage {
        let mut img = (*self.base).clone();
        let n = img.size();
        for overlay in &self.overlays {
            match *overlay {
                Overlay::Crosshair { row, col, color } => {
                    paint_column(&mut img, col, 0..n, color);
                    for x in (0..n).filter(|&x| x != col) {
                        blend_at(&mut img, x, row, color);
                    }
                }
                Overlay::RangeBand {
                    start,
                    end,
                    fill,
                    border,
                } => paint_band(&mut img, start, end, fill, border),
                Overlay::HoverHighlight { index, color } => {
                    paint_column(&mut img, index, 0..n, color);
                }
                Overlay::DistanceLabel { .. } => {}
            }
        }
        img
    }
}

/// Format a distance for the point label: two decimals, Å suffix.
#[must_use]
pub fn format_distance(distance: f32) -> String {
    if distance.is_finite() {
        format!("{distance:.2} Å")
    } else {
        "∞ Å".to_owned()
    }
}

/// Build the displayed image description for `selection`.
///
/// The point label's distance is recomputed from `atoms`, not read from the
/// matrix. Selections pointing past the raster produce no overlay.
#[must_use]
pub fn compose(
    heatmap: &Arc<HeatmapImage>,
    selection: SelectionState,
    atoms: &[AtomCoordinate],
    style: &OverlayOptions,
) -> Composition {
    let n = heatmap.size();
    let mut overlays = Vec::new();
    match selection {
        SelectionState::Point { row, col } if row < n && col < n => {
            overlays.push(Overlay::Crosshair {
                row,
                col,
                color: style.crosshair,
            });
            if let (Some(&a), Some(&b)) = (atoms.get(row), atoms.get(col)) {
                overlays.push(Overlay::DistanceLabel {
                    row,
                    col,
                    text: format_distance(pair_distance(a, b)),
                });
            }
        }
        SelectionState::Range { start, end } if start <= end && end < n => {
            overlays.push(Overlay::RangeBand {
                start,
                end,
                fill: style.band_fill,
                border: style.band_border,
            });
        }
        SelectionState::Hover(index) if style.show_hover && index < n => {
            overlays.push(Overlay::HoverHighlight {
                index,
                color: style.hover,
            });
        }
        _ => {}
    }
    Composition {
        base: Arc::clone(heatmap),
        overlays,
    }
}

fn paint_band(
    img: &mut HeatmapImage,
    start: AtomIndex,
    end: AtomIndex,
    fill: [u8; 4],
    border: [u8; 4],
) {
    let n = img.size();
    if n == 0 {
        return;
    }
    for x in start..=end {
        paint_column(img, x, 0..n, fill);
    }
    for x in start..=end {
        blend_at(img, x, 0, border);
        blend_at(img, x, n - 1, border);
    }
    paint_column(img, start, 1..n - 1, border);
    if end != start {
        paint_column(img, end, 1..n - 1, border);
    }
}

fn paint_column(
    img: &mut HeatmapImage,
    x: usize,
    rows: std::ops::Range<usize>,
    color: [u8; 4],
) {
    for y in rows {
        blend_at(img, x, y, color);
    }
}

fn blend_at(img: &mut HeatmapImage, x: usize, y: usize, src: [u8; 4]) {
    if let Some(dst) = img.pixel_mut(x, y) {
        *dst = blend(*dst, src);
    }
}

/// Source-over blend of `src` onto `dst` (straight alpha).
fn blend(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let a = u16::from(src[3]);
    let inv = 255 - a;
    let mix = |s: u8, d: u8| {
        ((u16::from(s) * a + u16::from(d) * inv + 127) / 255) as u8
    };
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (a + (u16::from(dst[3]) * inv + 127) / 255).min(255) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::matrix::DistanceMatrix;
    use crate::raster::{rasterize, WHITE};

    fn atoms() -> Vec<Vec3> {
        vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(3.0, 4.0, 0.0)]
    }

    fn heatmap(atoms: &[Vec3], threshold: f32) -> Arc<HeatmapImage> {
        Arc::new(rasterize(&DistanceMatrix::compute(atoms), threshold))
    }

    #[test]
    fn point_draws_crosshair_and_live_distance() {
        let atoms = atoms();
        let base = heatmap(&atoms, 0.0);
        let style = OverlayOptions::default();
        let c = compose(
            &base,
            SelectionState::Point { row: 0, col: 4 },
            &atoms,
            &style,
        );
        assert_eq!(c.label(), Some("5.00 Å"));
        let flat = c.flatten();
        // Crosshair lines change the white background
        assert_ne!(flat.pixel(4, 2), Some(WHITE));
        assert_ne!(flat.pixel(2, 0), Some(WHITE));
        // Cells away from both lines are untouched
        assert_eq!(flat.pixel(2, 2), Some(WHITE));
    }

    #[test]
    fn translucent_crosshair_tints_intersection_once() {
        let atoms = atoms();
        let base = heatmap(&atoms, 0.0);
        let style = OverlayOptions {
            crosshair: [0, 0, 255, 128],
            ..OverlayOptions::default()
        };
        let flat = compose(
            &base,
            SelectionState::Point { row: 1, col: 3 },
            &atoms,
            &style,
        )
        .flatten();
        let line = flat.pixel(3, 4);
        assert_eq!(line, Some(blend(WHITE, style.crosshair)));
        assert_eq!(flat.pixel(0, 1), line);
        assert_eq!(flat.pixel(3, 1), line);
    }

    #[test]
    fn compose_never_mutates_cached_heatmap() {
        let atoms = atoms();
        let base = heatmap(&atoms, 2.0);
        let before = (*base).clone();
        let c = compose(
            &base,
            SelectionState::Range { start: 1, end: 3 },
            &atoms,
            &OverlayOptions::default(),
        );
        let _ = c.flatten();
        assert_eq!(*base, before);
        assert_eq!(c.base(), &before);
    }

    #[test]
    fn range_band_covers_columns_full_height() {
        let atoms = atoms();
        let base = heatmap(&atoms, 0.0);
        let flat = compose(
            &base,
            SelectionState::Range { start: 1, end: 2 },
            &atoms,
            &OverlayOptions::default(),
        )
        .flatten();
        for y in 0..5 {
            assert_ne!(flat.pixel(1, y), Some(WHITE));
            assert_ne!(flat.pixel(2, y), Some(WHITE));
            assert_eq!(flat.pixel(0, y), Some(WHITE));
            assert_eq!(flat.pixel(4, y), Some(WHITE));
        }
    }

    #[test]
    fn none_and_hidden_hover_have_no_overlays() {
        let atoms = atoms();
        let base = heatmap(&atoms, 2.0);
        let style = OverlayOptions {
            show_hover: false,
            ..OverlayOptions::default()
        };
        assert!(compose(&base, SelectionState::None, &atoms, &style)
            .overlays()
            .is_empty());
        assert!(compose(&base, SelectionState::Hover(1), &atoms, &style)
            .overlays()
            .is_empty());
    }

    #[test]
    fn selection_past_raster_is_skipped() {
        let atoms = atoms();
        let base = heatmap(&atoms, 2.0);
        let c = compose(
            &base,
            SelectionState::Point { row: 9, col: 0 },
            &atoms,
            &OverlayOptions::default(),
        );
        assert!(c.overlays().is_empty());
    }

    #[test]
    fn infinite_distance_label() {
        assert_eq!(format_distance(f32::INFINITY), "∞ Å");
        assert_eq!(format_distance(1.414_213_5), "1.41 Å");
    }

    #[test]
    fn blend_extremes() {
        assert_eq!(blend(WHITE, [0, 0, 0, 255]), [0, 0, 0, 255]);
        assert_eq!(blend(WHITE, [0, 0, 0, 0]), WHITE);
    }
}
