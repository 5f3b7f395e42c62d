//! Pairwise conflict relation over course indices.

/// A symmetric conflict relation over course indices `0..n`.
///
/// This is the seam between conflict analysis and the search: the search
/// only asks whether two course positions conflict. Implemented by
/// [`ConflictMatrix`] and by any `Fn(usize, usize) -> bool`.
pub trait ConflictRelation {
    /// Whether courses `a` and `b` conflict.
    ///
    /// Must be symmetric. Never called with `a == b` by the search.
    fn conflicts(&self, a: usize, b: usize) -> bool;
}

impl<F> ConflictRelation for F
where
    F: Fn(usize, usize) -> bool,
{
    fn conflicts(&self, a: usize, b: usize) -> bool {
        self(a, b)
    }
}

/// Dense symmetric conflict matrix.
///
/// Cell `(a, b)` is `true` iff courses `a` and `b` conflict. The diagonal
/// is always `false`: a course never conflicts with itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl ConflictMatrix {
    /// Creates a conflict-free matrix over `size` courses.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Creates a matrix from an edge list.
    ///
    /// # Panics
    /// Panics if an edge endpoint is `>= size`.
    pub fn from_edges(size: usize, edges: &[(usize, usize)]) -> Self {
        let mut matrix = Self::new(size);
        for &(a, b) in edges {
            matrix.set_conflict(a, b);
        }
        matrix
    }

    /// Marks `a` and `b` as conflicting (both directions).
    ///
    /// Self-pairs are ignored.
    ///
    /// # Panics
    /// Panics if `a` or `b` is `>= size`.
    pub fn set_conflict(&mut self, a: usize, b: usize) {
        assert!(
            a < self.size && b < self.size,
            "course index out of range: ({a}, {b}) for {} courses",
            self.size
        );
        if a == b {
            return;
        }
        self.cells[a * self.size + b] = true;
        self.cells[b * self.size + a] = true;
    }

    /// Number of courses.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `a` and `b` conflict. Out-of-range indices never conflict.
    #[inline]
    pub fn conflicts(&self, a: usize, b: usize) -> bool {
        a != b && a < self.size && b < self.size && self.cells[a * self.size + b]
    }

    /// Number of conflicting pairs.
    pub fn conflict_count(&self) -> usize {
        (0..self.size)
            .map(|a| ((a + 1)..self.size).filter(|&b| self.conflicts(a, b)).count())
            .sum()
    }
}

impl ConflictRelation for ConflictMatrix {
    fn conflicts(&self, a: usize, b: usize) -> bool {
        ConflictMatrix::conflicts(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric() {
        let m = ConflictMatrix::from_edges(3, &[(0, 2)]);
        assert!(m.conflicts(0, 2));
        assert!(m.conflicts(2, 0));
        assert!(!m.conflicts(0, 1));
        assert_eq!(m.conflict_count(), 1);
    }

    #[test]
    fn test_self_pairs_ignored() {
        let m = ConflictMatrix::from_edges(2, &[(1, 1)]);
        assert!(!m.conflicts(1, 1));
        assert_eq!(m.conflict_count(), 0);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let m = ConflictMatrix::from_edges(2, &[(0, 1)]);
        assert!(!m.conflicts(0, 5));
        assert!(!m.conflicts(5, 0));
    }

    #[test]
    #[should_panic(expected = "course index out of range")]
    fn test_out_of_range_edge_panics() {
        ConflictMatrix::from_edges(2, &[(0, 2)]);
    }

    #[test]
    fn test_conflict_count_star() {
        // Star centred on 1.
        let m = ConflictMatrix::from_edges(4, &[(1, 0), (1, 2), (3, 1)]);
        assert!(m.conflicts(3, 1));
        assert!(!m.conflicts(0, 2));
        assert_eq!(m.conflict_count(), 3);
    }

    #[test]
    fn test_closure_relation() {
        let even_odd = |a: usize, b: usize| (a + b) % 2 == 1;
        assert!(ConflictRelation::conflicts(&even_odd, 0, 1));
        assert!(!ConflictRelation::conflicts(&even_odd, 0, 2));
    }
}
