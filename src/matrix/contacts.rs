//! Contact queries: which atom pairs sit closer than a cutoff.
//!
//! Each unordered pair is counted once and the diagonal is skipped.
//! Infinite distances never count as contacts.

use super::{AtomIndex, DistanceMatrix};

impl DistanceMatrix {
    /// Number of atom pairs with distance strictly below `threshold`.
    #[must_use]
    pub fn count_contacts(&self, threshold: f32) -> usize {
        self.upper_triangle()
            .filter(|&(_, _, d)| d < threshold)
            .count()
    }

    /// `(i, j)` pairs (with `i < j`) whose distance is below `threshold`.
    #[must_use]
    pub fn contacts_below(&self, threshold: f32) -> Vec<(AtomIndex, AtomIndex)> {
        self.upper_triangle()
            .filter(|&(_, _, d)| d < threshold)
            .map(|(i, j, _)| (i, j))
            .collect()
    }

    /// Fraction of all atom pairs that are in contact. Zero for fewer than
    /// two atoms.
    #[must_use]
    pub fn contact_density(&self, threshold: f32) -> f32 {
        let n = self.size();
        if n < 2 {
            return 0.0;
        }
        let pairs = n * (n - 1) / 2;
        self.count_contacts(threshold) as f32 / pairs as f32
    }

    fn upper_triangle(
        &self,
    ) -> impl Iterator<Item = (AtomIndex, AtomIndex, f32)> + '_ {
        let n = self.size();
        (0..n).flat_map(move |i| {
            ((i + 1)..n).map(move |j| (i, j, self.as_slice()[i * n + j]))
        })
    }
}
