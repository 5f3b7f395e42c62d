//! Exhaustive include-first backtracking.
//!
//! # Algorithm
//! Courses are decided one at a time in their fixed order. At position
//! `pos`:
//! 1. If course `pos` conflicts with nothing tentatively included, include
//!    it and recurse on `pos + 1`.
//! 2. Exclude it and recurse on `pos + 1`.
//!
//! When every course is decided, the selection is compared against the
//! best size seen so far in this traversal: strictly larger resets the
//! collected sets to just this one, equal appends it, smaller is ignored.
//!
//! Each leaf is a distinct subset, so no set is reported twice. The
//! traversal order (input order, include before exclude) fixes the order
//! of the results.
//!
//! # Complexity
//! O(2ⁿ · n) in the worst case for n courses. The only pruning is the
//! feasibility check in step 1.

use crate::conflict::ConflictRelation;

/// One traversal of the maximum conflict-free set search.
///
/// Holds the best-size tracker and collected sets for a single run; a new
/// value is created per search, so nothing is shared between runs.
pub struct MaximumSetSearch<'a, R: ConflictRelation + ?Sized> {
    relation: &'a R,
    size: usize,
    current: Vec<usize>,
    best_len: usize,
    found: Vec<Vec<usize>>,
}

impl<'a, R: ConflictRelation + ?Sized> MaximumSetSearch<'a, R> {
    /// Prepares a search over courses `0..size`.
    pub fn new(size: usize, relation: &'a R) -> Self {
        Self {
            relation,
            size,
            current: Vec::with_capacity(size),
            best_len: 0,
            found: Vec::new(),
        }
    }

    /// Runs the traversal and returns every maximum conflict-free set.
    ///
    /// Each set lists course indices in ascending order. For `size == 0`
    /// the only set is the empty one.
    pub fn run(mut self) -> Vec<Vec<usize>> {
        self.backtrack(0);
        self.found
    }

    fn backtrack(&mut self, pos: usize) {
        if pos == self.size {
            self.record();
            return;
        }

        if self.can_include(pos) {
            self.current.push(pos);
            self.backtrack(pos + 1);
            self.current.pop();
        }
        self.backtrack(pos + 1);
    }

    fn can_include(&self, pos: usize) -> bool {
        self.current
            .iter()
            .all(|&chosen| !self.relation.conflicts(pos, chosen))
    }

    fn record(&mut self) {
        let len = self.current.len();
        if len > self.best_len {
            self.best_len = len;
            self.found.clear();
            self.found.push(self.current.clone());
        } else if len == self.best_len {
            self.found.push(self.current.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::ConflictMatrix;

    fn run(size: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
        let m = ConflictMatrix::from_edges(size, edges);
        MaximumSetSearch::new(size, &m).run()
    }

    #[test]
    fn test_no_conflicts_takes_everything() {
        assert_eq!(run(4, &[]), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_single_edge() {
        assert_eq!(run(2, &[(0, 1)]), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_triangle() {
        assert_eq!(
            run(3, &[(0, 1), (1, 2), (0, 2)]),
            vec![vec![0], vec![1], vec![2]]
        );
    }

    #[test]
    fn test_path_prefers_larger_sets() {
        // 0 - 1 - 2: {0, 2} beats {1}.
        assert_eq!(run(3, &[(0, 1), (1, 2)]), vec![vec![0, 2]]);
    }

    #[test]
    fn test_larger_set_found_late_resets() {
        // Star centred on 0: the greedy first leaf {0} is beaten by {1, 2, 3}.
        assert_eq!(run(4, &[(0, 1), (0, 2), (0, 3)]), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_discovery_order_include_first() {
        // 4-cycle 0-1-2-3-0: maximum sets {0, 2} and {1, 3}.
        assert_eq!(
            run(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]),
            vec![vec![0, 2], vec![1, 3]]
        );
    }

    #[test]
    fn test_empty_universe() {
        assert_eq!(run(0, &[]), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_dyn_relation() {
        let m = ConflictMatrix::from_edges(2, &[(0, 1)]);
        let relation: &dyn ConflictRelation = &m;
        let sets = MaximumSetSearch::new(2, relation).run();
        assert_eq!(sets.len(), 2);
    }
}
