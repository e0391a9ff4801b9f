//! All-pairs Euclidean distance matrix over atom coordinates.
//!
//! # Scaling
//!
//! Computing the matrix is O(N²) in both time and memory, and the heatmap
//! raster derived from it is another N² RGBA pixels. A 10 000-atom
//! structure needs ~400 MB for the distances alone. Hosts should go through
//! [`DistanceMatrix::compute_bounded`] (the engine always does) so that
//! oversized structures are rejected up front instead of stalling the UI
//! thread.
//!
//! # Non-finite coordinates
//!
//! An atom with any non-finite component is treated as infinitely far from
//! every other atom: its row and column are [`f32::INFINITY`] apart from the
//! zero diagonal. No other cell is affected.

mod contacts;

use glam::Vec3;

use crate::error::ContactMapError;

/// Position of one atom in Ångström.
pub type AtomCoordinate = Vec3;

/// Index of an atom within the loaded structure (row/column of the matrix).
pub type AtomIndex = usize;

/// Symmetric N×N matrix of pairwise atom distances (Å), row-major.
///
/// Built wholesale by [`compute`](Self::compute); never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<f32>,
}

impl DistanceMatrix {
    /// Compute the full distance matrix for `atoms`.
    ///
    /// Only the upper triangle is evaluated; the lower triangle is mirrored,
    /// so `get(i, j) == get(j, i)` and `get(i, i) == 0` hold exactly.
    /// An empty slice yields an empty matrix.
    #[must_use]
    pub fn compute(atoms: &[AtomCoordinate]) -> Self {
        let n = atoms.len();
        Self::fill(atoms, vec![0.0; n * n])
    }

    /// Like [`compute`](Self::compute), but refuses structures with more
    /// than `max_atoms` atoms (`0` disables the check) and reports a buffer
    /// that cannot be reserved instead of aborting.
    pub fn compute_bounded(
        atoms: &[AtomCoordinate],
        max_atoms: usize,
    ) -> Result<Self, ContactMapError> {
        let n = atoms.len();
        if max_atoms > 0 && n > max_atoms {
            return Err(ContactMapError::TooManyAtoms {
                count: n,
                limit: max_atoms,
            });
        }
        let cells = n
            .checked_mul(n)
            .ok_or(ContactMapError::AllocationFailed { cells: usize::MAX })?;
        let mut distances = Vec::new();
        distances
            .try_reserve_exact(cells)
            .map_err(|_| ContactMapError::AllocationFailed { cells })?;
        distances.resize(cells, 0.0);
        Ok(Self::fill(atoms, distances))
    }

    fn fill(atoms: &[AtomCoordinate], mut distances: Vec<f32>) -> Self {
        let n = atoms.len();
        for i in 0..n {
            let a = atoms[i];
            let a_finite = a.is_finite();
            for j in (i + 1)..n {
                let b = atoms[j];
                let d = if a_finite && b.is_finite() {
                    a.distance(b)
                } else {
                    f32::INFINITY
                };
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }
        Self { size: n, distances }
    }

    /// Number of atoms (rows and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix has no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance between atoms `i` and `j`, or `None` if either is out of
    /// range.
    #[must_use]
    pub fn get(&self, i: AtomIndex, j: AtomIndex) -> Option<f32> {
        if i < self.size && j < self.size {
            Some(self.distances[i * self.size + j])
        } else {
            None
        }
    }

    /// All distances from atom `i`.
    #[must_use]
    pub fn row(&self, i: AtomIndex) -> Option<&[f32]> {
        if i < self.size {
            let start = i * self.size;
            Some(&self.distances[start..start + self.size])
        } else {
            None
        }
    }

    /// Row-major distances, `size * size` long.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.distances
    }
}

/// Live distance between two atoms, recomputed from coordinates.
///
/// Follows the same non-finite policy as the matrix.
#[must_use]
pub fn pair_distance(a: AtomCoordinate, b: AtomCoordinate) -> f32 {
    if a.is_finite() && b.is_finite() {
        a.distance(b)
    } else {
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Vec<Vec3> {
        vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z]
    }

    #[test]
    fn empty_input_gives_empty_matrix() {
        let m = DistanceMatrix::compute(&[]);
        assert!(m.is_empty());
        assert_eq!(m.size(), 0);
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    fn symmetric_with_zero_diagonal() {
        let atoms = vec![
            Vec3::new(1.5, -2.0, 0.3),
            Vec3::new(4.0, 0.0, 7.1),
            Vec3::new(-3.2, 2.2, 2.2),
            Vec3::new(0.0, 0.0, -9.0),
            Vec3::new(12.0, 1.0, 1.0),
        ];
        let m = DistanceMatrix::compute(&atoms);
        for i in 0..atoms.len() {
            assert_eq!(m.get(i, i), Some(0.0));
            for j in 0..atoms.len() {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
    }

    #[test]
    fn tetrahedron_distances() {
        let m = DistanceMatrix::compute(&tetrahedron());
        let sqrt2 = 2.0_f32.sqrt();
        assert_eq!(m.get(0, 1), Some(1.0));
        assert_eq!(m.get(0, 2), Some(1.0));
        assert_eq!(m.get(0, 3), Some(1.0));
        for (i, j) in [(1, 2), (1, 3), (2, 3)] {
            let d = m.get(i, j).unwrap();
            assert!((d - sqrt2).abs() < 1e-6);
        }
    }

    #[test]
    fn out_of_range_access_is_none() {
        let m = DistanceMatrix::compute(&tetrahedron());
        assert_eq!(m.get(4, 0), None);
        assert_eq!(m.get(0, 4), None);
        assert!(m.row(4).is_none());
        assert_eq!(m.row(0).unwrap().len(), 4);
    }

    #[test]
    fn non_finite_atom_is_infinitely_far() {
        let atoms = vec![
            Vec3::ZERO,
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::X,
        ];
        let m = DistanceMatrix::compute(&atoms);
        assert_eq!(m.get(1, 1), Some(0.0));
        assert_eq!(m.get(0, 1), Some(f32::INFINITY));
        assert_eq!(m.get(2, 1), Some(f32::INFINITY));
        // Unrelated pair stays intact
        assert_eq!(m.get(0, 2), Some(1.0));
    }

    #[test]
    fn bounded_rejects_oversized_structure() {
        let atoms = vec![Vec3::ZERO; 10];
        let err = DistanceMatrix::compute_bounded(&atoms, 9).unwrap_err();
        assert!(matches!(
            err,
            ContactMapError::TooManyAtoms {
                count: 10,
                limit: 9
            }
        ));
    }

    #[test]
    fn bounded_zero_limit_is_unlimited() {
        let m = DistanceMatrix::compute_bounded(&tetrahedron(), 0).unwrap();
        assert_eq!(m, DistanceMatrix::compute(&tetrahedron()));
    }

    #[test]
    fn pair_distance_matches_matrix() {
        let atoms = tetrahedron();
        let m = DistanceMatrix::compute(&atoms);
        assert_eq!(pair_distance(atoms[1], atoms[3]), m.get(1, 3).unwrap());
        assert_eq!(
            pair_distance(Vec3::ZERO, Vec3::splat(f32::INFINITY)),
            f32::INFINITY
        );
    }
}
