//! Maximum conflict-free course set search.
//!
//! Finds **every** largest subset of course codes in which no two codes
//! conflict (all maximum independent sets of the conflict graph), and
//! packages each as a [`ScheduleCandidate`].
//!
//! # Algorithm
//!
//! Exhaustive binary backtracking in input order, "include" before
//! "exclude", with a best-size tracker spanning the traversal (see
//! [`MaximumSetSearch`]). Results come out in discovery order, which is
//! deterministic for a given course order.
//!
//! # Scale
//!
//! Exponential in the number of distinct course codes, with no iteration
//! cap or timeout. Intended for cart-sized inputs; larger universes would
//! need branch-and-bound pruning on the number of codes still addable.
//!
//! # Reference
//! Tarjan & Trojanowski (1977), "Finding a Maximum Independent Set"

mod assemble;
mod backtrack;

pub use assemble::assemble_candidate;
pub use backtrack::MaximumSetSearch;

use log::info;

use crate::conflict::ConflictRelation;
use crate::error::{Result, TimetableError};
use crate::models::ScheduleCandidate;

/// Finds every maximum conflict-free selection of `codes`.
///
/// `relation` is indexed by position in `codes`. Codes are expected to be
/// distinct.
///
/// # Errors
/// [`TimetableError::NoCourses`] if `codes` is empty.
///
/// # Example
///
/// ```
/// use u_timetable::conflict::ConflictMatrix;
/// use u_timetable::search::find_candidates;
///
/// // A conflicts with B; C is free.
/// let codes = ["A", "B", "C"];
/// let matrix = ConflictMatrix::from_edges(3, &[(0, 1)]);
///
/// let candidates = find_candidates(&codes, &matrix).unwrap();
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[0].selected(), ["A", "C"]);
/// assert_eq!(candidates[0].excluded_conflicts("B").unwrap(), ["A"]);
/// assert_eq!(candidates[1].selected(), ["B", "C"]);
/// ```
pub fn find_candidates<S, R>(codes: &[S], relation: &R) -> Result<Vec<ScheduleCandidate>>
where
    S: AsRef<str>,
    R: ConflictRelation + ?Sized,
{
    if codes.is_empty() {
        return Err(TimetableError::NoCourses);
    }
    debug_assert!(
        codes.iter().enumerate().all(|(i, a)| codes[i + 1..]
            .iter()
            .all(|b| a.as_ref() != b.as_ref())),
        "course codes must be distinct"
    );

    let sets = MaximumSetSearch::new(codes.len(), relation).run();
    let candidates: Vec<ScheduleCandidate> = sets
        .iter()
        .map(|members| assemble_candidate(codes, members, relation))
        .collect();

    info!(
        "found {} maximum schedule(s) of {} course(s) out of {}",
        candidates.len(),
        candidates.first().map_or(0, |c| c.size()),
        codes.len()
    );

    Ok(candidates)
}
