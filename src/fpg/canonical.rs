//! Canonical relator acceptance
//!
//! A word is an acceptable relator iff it is cyclically reduced, shortlex-least
//! within its cyclic-inverse equivalence class, and not of the
//! generator-eliminating shape. Any rotation of a relator, or the inverse of a
//! rotation, generates the same normal closure, so only the least class
//! representative is ever admitted.
//!
//! Besides the full test there is a prefix test, so a search building a relator
//! letter by letter can abandon a candidate as soon as no extension of the
//! prefix can pass.

use std::cmp::Ordering;

use super::alphabet::Alphabet;
use super::ordering::ShortLex;
use super::word::Word;

/// True iff `word` is shortlex-least within its cyclic-inverse equivalence
/// class (all rotations of the word and their inverses).
pub fn is_cyclic_inverse_minimal(word: &Word, alphabet: &Alphabet) -> bool {
    let shortlex = ShortLex::new(alphabet);
    word.inverse_cyclic_shifts()
        .iter()
        .all(|member| !shortlex.precedes(member, word))
}

/// True iff the relator has the generator-eliminating shape: a leading
/// generator `x` followed by a subword containing neither `x` nor its inverse.
///
/// Such a relator expresses `x` as a word in the other generators, so the
/// presentation collapses by substitution to one with fewer generators, which
/// precedes it in the enumeration. Every length-1 word has this shape.
pub fn eliminates_generator(word: &Word) -> bool {
    match word.letters().split_first() {
        Some((&leading, rest)) => rest.iter().all(|&l| l != leading && l != -leading),
        None => false,
    }
}

/// The full relator acceptance test: cyclically reduced (hence freely
/// reduced), least in its cyclic-inverse class, and not generator-eliminating.
pub fn is_canonical_relator(word: &Word, alphabet: &Alphabet) -> bool {
    word.is_cyclically_reduced()
        && is_cyclic_inverse_minimal(word, alphabet)
        && !eliminates_generator(word)
}

/// Decide whether a partial relator can still extend to a canonical one.
///
/// `prefix` holds the first letters of a candidate that will be completed to
/// length `target_len`. The test is conservative: `false` means no completion
/// can pass [`is_canonical_relator`], while `true` leaves the completed word
/// to the full test.
///
/// Three prunes apply:
/// - a cancelling adjacent pair (including last-against-first once the prefix
///   reaches full length) can never be repaired by extension;
/// - the rotation starting at position `i` agrees with `prefix[i..]` on its
///   first letters, so if that segment already compares strictly below the
///   candidate's front, the rotation precedes every completion;
/// - the inverse of the rotation ending after position `i` begins with the
///   reversed negation of `prefix[..=i]`, pruned the same way.
pub fn prefix_is_viable(prefix: &[i32], target_len: usize, alphabet: &Alphabet) -> bool {
    debug_assert!(prefix.len() <= target_len);
    let filled = prefix.len();
    if prefix.windows(2).any(|pair| pair[0] == -pair[1]) {
        return false;
    }
    if filled == target_len && filled >= 2 && prefix[filled - 1] == -prefix[0] {
        return false;
    }

    let shortlex = ShortLex::new(alphabet);
    for i in 1..filled {
        if shortlex.compare_letters(&prefix[i..], &prefix[..filled - i]) == Ordering::Less {
            return false;
        }
    }

    let mut head: Vec<i32> = Vec::with_capacity(filled);
    for i in 0..filled {
        head.clear();
        head.extend(prefix[..=i].iter().rev().map(|&l| -l));
        if shortlex.compare_letters(&head, &prefix[..=i]) == Ordering::Less {
            return false;
        }
    }
    true
}
