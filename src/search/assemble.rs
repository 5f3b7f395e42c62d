//! Candidate assembly.
//!
//! Turns a set of course indices into a [`ScheduleCandidate`]: the
//! selected codes in input order, and for every other code, the selected
//! codes it conflicts with.

use crate::conflict::ConflictRelation;
use crate::models::{Exclusion, ScheduleCandidate};

/// Builds the candidate for one conflict-free set.
///
/// `members` are indices into `codes`, ascending.
pub fn assemble_candidate<S, R>(codes: &[S], members: &[usize], relation: &R) -> ScheduleCandidate
where
    S: AsRef<str>,
    R: ConflictRelation + ?Sized,
{
    debug_assert!(
        members.windows(2).all(|w| w[0] < w[1]),
        "members must be ascending"
    );
    debug_assert!(
        members.iter().enumerate().all(|(k, &a)| members[k + 1..]
            .iter()
            .all(|&b| !relation.conflicts(a, b))),
        "selected courses must be pairwise conflict-free"
    );

    let mut in_set = vec![false; codes.len()];
    for &m in members {
        in_set[m] = true;
    }

    let selected = members
        .iter()
        .map(|&m| codes[m].as_ref().to_string())
        .collect();

    let excluded = (0..codes.len())
        .filter(|&i| !in_set[i])
        .map(|i| {
            let conflicts_with = members
                .iter()
                .filter(|&&m| relation.conflicts(i, m))
                .map(|&m| codes[m].as_ref().to_string())
                .collect();
            Exclusion::new(codes[i].as_ref(), conflicts_with)
        })
        .collect();

    ScheduleCandidate::new(selected, excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflict::ConflictMatrix;

    #[test]
    fn test_exclusions_name_selected_conflicts_only() {
        // A-B, B-C, C-D; selection {A, C}.
        let codes = ["A", "B", "C", "D"];
        let m = ConflictMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let c = assemble_candidate(&codes, &[0, 2], &m);

        assert_eq!(c.selected(), ["A", "C"]);
        assert_eq!(c.excluded_codes(), vec!["B", "D"]);
        assert_eq!(c.excluded_conflicts("B").unwrap(), ["A", "C"]);
        assert_eq!(c.excluded_conflicts("D").unwrap(), ["C"]);
    }

    #[test]
    fn test_excluded_without_conflict_has_empty_list() {
        // A-B conflict; C is free but deliberately left out.
        let codes = ["A", "B", "C"];
        let m = ConflictMatrix::from_edges(3, &[(0, 1)]);
        let c = assemble_candidate(&codes, &[0], &m);
        assert!(c.excluded_conflicts("C").unwrap().is_empty());
    }

    #[test]
    fn test_no_exclusions_when_all_selected() {
        let codes = vec!["X".to_string(), "Y".to_string()];
        let m = ConflictMatrix::new(2);
        let c = assemble_candidate(&codes, &[0, 1], &m);
        assert_eq!(c.size(), 2);
        assert!(c.excluded().is_empty());
    }
}
