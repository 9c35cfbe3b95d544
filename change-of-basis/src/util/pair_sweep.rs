use core::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::string::String;
use std::vec::Vec;

use crate::Frame;

/// Calls `check(from, to)` for every ordered pair of frames in [`Frame::ALL`].
///
/// Equivalent to [`for_each_pair`] over [`Frame::ALL`].
pub fn for_each_frame_pair<F>(check: F)
where
    F: FnMut(Frame, Frame),
{
    for_each_pair(&Frame::ALL, check);
}

/// Calls `check(from, to)` for every ordered pair drawn from `items`, including pairs
/// of an item with itself.
///
/// A panic inside `check` does not stop the sweep. Every pair is visited, and if any
/// of them panicked, this function then panics with the full list of failing pairs,
/// so that a single test run shows the whole pattern of failures.
///
/// ```
/// use change_of_basis::{util::for_each_frame_pair, CaseNumber};
///
/// for_each_frame_pair(|from, to| {
///     assert_eq!(CaseNumber::from_frames(from, to).transform_frame(from), to);
/// });
/// ```
///
/// # Panics
///
/// Panics after the sweep if `check` panicked for at least one pair.
pub fn for_each_pair<T, F>(items: &[T], mut check: F)
where
    T: Copy + fmt::Display,
    F: FnMut(T, T),
{
    let mut failed: Vec<(T, T)> = Vec::new();
    for &from in items {
        for &to in items {
            // The panic hook has already printed the message; only the pair is kept.
            if panic::catch_unwind(AssertUnwindSafe(|| check(from, to))).is_err() {
                failed.push((from, to));
            }
        }
    }

    if failed.is_empty() {
        return;
    }
    let list: String = failed
        .iter()
        .map(|(from, to)| std::format!("\n  {from} -> {to}"))
        .collect();
    panic!(
        "{failed} of {total} pairs failed:{list}",
        failed = failed.len(),
        total = items.len() * items.len(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaseNumber;

    #[test]
    fn all_pairs_visited() {
        let mut seen = Vec::new();
        for_each_pair(&[1, 2, 3], |a, b| seen.push((a, b)));
        assert_eq!(
            seen,
            [(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
        );

        let mut count = 0;
        for_each_frame_pair(|_, _| count += 1);
        assert_eq!(count, 48 * 48);
    }

    #[test]
    #[should_panic = "2 of 4 pairs failed:\n  1 -> 2\n  2 -> 1"]
    fn failing_pairs_listed() {
        for_each_pair(&[1, 2], |a, b| assert_eq!(a, b));
    }

    #[test]
    #[should_panic = "48 of 2304 pairs failed:\n  (Forward, Right, Up) -> (Forward, Right, Up)\n"]
    fn failing_frame_pairs_listed() {
        for_each_frame_pair(|from, to| {
            assert_ne!(CaseNumber::from_frames(from, to), CaseNumber::IDENTITY);
        });
    }
}
