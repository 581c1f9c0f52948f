//! Non-decreasing length compositions
//!
//! A total relator-length budget is split across relators as a non-decreasing
//! sequence of positive parts, so each multiset of lengths appears exactly
//! once. Relator order inside a presentation is fixed separately by the
//! shortlex order, so nothing is lost by fixing the part order here.

/// Every non-decreasing sequence of positive integers summing to `total`.
///
/// Compositions are grouped by first (smallest) part, ascending; within a
/// group the remainder is partitioned recursively with the first part as a
/// lower bound. For `total = 5` this yields, in order: `[1,1,1,1,1]`,
/// `[1,1,1,2]`, `[1,1,3]`, `[1,2,2]`, `[1,4]`, `[2,3]`, `[5]`.
/// `total = 0` has no compositions.
pub fn nondecreasing_partitions(total: usize) -> Vec<Vec<usize>> {
    let mut partitions = Vec::new();
    for first in 1..=total {
        partitions.extend(partitions_starting_with(first, total));
    }
    partitions
}

/// Non-decreasing compositions of `total` whose first part is exactly `first`.
fn partitions_starting_with(first: usize, total: usize) -> Vec<Vec<usize>> {
    let mut partitions = Vec::new();
    if first == total {
        partitions.push(vec![total]);
    } else if first < total {
        let remainder = total - first;
        for next in first..=remainder {
            for mut tail in partitions_starting_with(next, remainder) {
                let mut composition = Vec::with_capacity(tail.len() + 1);
                composition.push(first);
                composition.append(&mut tail);
                partitions.push(composition);
            }
        }
    }
    partitions
}
