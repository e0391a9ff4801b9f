//! Single-slot memoization keyed by change-detection values.
//!
//! The engine keeps two of these: one for the heatmap (keyed by structure
//! generation and threshold) and one for the composited overlay (keyed by
//! heatmap key and displayed selection). A value is recomputed only when
//! its key differs from the one it was built with.

/// Caches the most recent value together with the key it was derived from.
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Create an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it with `f` first if
    /// the key changed (or nothing is cached yet).
    pub fn get_or_compute(&mut self, key: K, f: impl FnOnce() -> V) -> &V {
        let stale = self.slot.as_ref().is_none_or(|(k, _)| *k != key);
        if stale {
            self.slot = None;
        }
        let (_, v) = self.slot.get_or_insert_with(|| (key, f()));
        v
    }

    /// The cached value, if it was built for `key`.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.slot
            .as_ref()
            .and_then(|(k, v)| (k == key).then_some(v))
    }

    /// Drop the cached value.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Whether a value is cached.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn recomputes_only_on_key_change() {
        let calls = Cell::new(0);
        let mut memo = Memo::new();
        let compute = |v: u32| {
            calls.set(calls.get() + 1);
            v * 10
        };
        assert_eq!(*memo.get_or_compute(1, || compute(1)), 10);
        assert_eq!(*memo.get_or_compute(1, || compute(1)), 10);
        assert_eq!(calls.get(), 1);
        assert_eq!(*memo.get_or_compute(2, || compute(2)), 20);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn get_checks_key() {
        let mut memo = Memo::new();
        let _ = memo.get_or_compute("a", || 1);
        assert_eq!(memo.get(&"a"), Some(&1));
        assert_eq!(memo.get(&"b"), None);
        memo.invalidate();
        assert!(!memo.is_filled());
    }
}
