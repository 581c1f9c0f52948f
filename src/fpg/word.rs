//! Words in the free group

use serde::{Deserialize, Serialize};
use std::fmt;

/// A word over a generator alphabet: a finite sequence of nonzero symbols.
///
/// The empty word denotes the group identity. A `Word` is not inherently
/// reduced; free and cyclic reduction are predicates on words, not invariants
/// of the type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    letters: Vec<i32>,
}

impl Word {
    pub fn new(letters: Vec<i32>) -> Self {
        Word { letters }
    }

    pub fn empty() -> Self {
        Word {
            letters: Vec::new(),
        }
    }

    /// The underlying symbol sequence.
    pub fn letters(&self) -> &[i32] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The group inverse: letters reversed and negated.
    ///
    /// An involution: `w.inverse().inverse() == w` for every word.
    pub fn inverse(&self) -> Word {
        Word {
            letters: self.letters.iter().rev().map(|&l| -l).collect(),
        }
    }

    /// Rotate left by `n` positions (right by `-n` when `n` is negative).
    ///
    /// Rotation is modular: shifting by the word's own length (or by zero)
    /// returns the word unchanged.
    pub fn cyclic_shift_left(&self, n: isize) -> Word {
        if self.letters.is_empty() {
            return self.clone();
        }
        let len = self.letters.len();
        let split = n.rem_euclid(len as isize) as usize;
        let mut letters = Vec::with_capacity(len);
        letters.extend_from_slice(&self.letters[split..]);
        letters.extend_from_slice(&self.letters[..split]);
        Word { letters }
    }

    /// All distinct left-rotations, starting with the word itself.
    ///
    /// Stops as soon as a nontrivial rotation reproduces the word, so a
    /// periodic word contributes each distinct rotation exactly once.
    pub fn cyclic_shifts(&self) -> Vec<Word> {
        let mut shifts = vec![self.clone()];
        for i in 1..self.letters.len() {
            let shifted = self.cyclic_shift_left(i as isize);
            if shifted == *self {
                break;
            }
            shifts.push(shifted);
        }
        shifts
    }

    /// The cyclic-inverse equivalence class: every cyclic shift together with
    /// its inverse. Relators in the same class generate the same normal
    /// closure.
    pub fn inverse_cyclic_shifts(&self) -> Vec<Word> {
        let shifts = self.cyclic_shifts();
        let mut class = Vec::with_capacity(2 * shifts.len());
        for shift in shifts {
            let inverse = shift.inverse();
            class.push(shift);
            class.push(inverse);
        }
        class
    }

    /// True iff no two adjacent letters cancel when the word is read linearly.
    pub fn is_freely_reduced(&self) -> bool {
        self.letters.windows(2).all(|pair| pair[0] != -pair[1])
    }

    /// True iff no adjacent pair cancels when the word is read as a cycle:
    /// the wrap from the last letter back to the first is checked as well.
    ///
    /// Implies free reduction. The empty word and every single-letter word
    /// are cyclically reduced.
    pub fn is_cyclically_reduced(&self) -> bool {
        let len = self.letters.len();
        (0..len).all(|i| self.letters[(i + len - 1) % len] != -self.letters[i])
    }
}

/// Write one symbol in letter notation: generators 1..=26 as a..z, an
/// apostrophe marking an inverse, larger ids as `x<id>`.
pub(crate) fn write_letter(f: &mut fmt::Formatter<'_>, letter: i32) -> fmt::Result {
    let base = letter.unsigned_abs();
    if (1..=26).contains(&base) {
        write!(f, "{}", (b'a' + (base as u8 - 1)) as char)?;
    } else {
        write!(f, "x{base}")?;
    }
    if letter < 0 {
        write!(f, "'")?;
    }
    Ok(())
}

impl fmt::Display for Word {
    /// Letter notation; the empty word renders as the identity `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.letters.is_empty() {
            return write!(f, "1");
        }
        for &letter in &self.letters {
            write_letter(f, letter)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_is_an_involution() {
        let word = Word::new(vec![1, -2, 3, 1]);
        assert_eq!(word.inverse(), Word::new(vec![-1, -3, 2, -1]));
        assert_eq!(word.inverse().inverse(), word);
        assert_eq!(Word::empty().inverse(), Word::empty());
    }

    #[test]
    fn test_cyclic_shift_left() {
        let word = Word::new(vec![1, 2, 3, 4]);
        assert_eq!(word.cyclic_shift_left(1), Word::new(vec![2, 3, 4, 1]));
        assert_eq!(word.cyclic_shift_left(3), Word::new(vec![4, 1, 2, 3]));
        assert_eq!(word.cyclic_shift_left(-1), Word::new(vec![4, 1, 2, 3]));
        assert_eq!(word.cyclic_shift_left(4), word);
        assert_eq!(word.cyclic_shift_left(5), Word::new(vec![2, 3, 4, 1]));
        assert_eq!(Word::empty().cyclic_shift_left(2), Word::empty());
    }

    #[test]
    fn test_cyclic_shifts_stop_at_the_period() {
        assert_eq!(Word::new(vec![1, 1, 1]).cyclic_shifts().len(), 1);
        assert_eq!(Word::new(vec![1, 2, 1, 2]).cyclic_shifts().len(), 2);
        assert_eq!(Word::new(vec![1, 2, 3, 4]).cyclic_shifts().len(), 4);
        assert_eq!(Word::empty().cyclic_shifts(), vec![Word::empty()]);
    }

    #[test]
    fn test_shift_count_divides_length() {
        for word in [
            Word::new(vec![1, 1]),
            Word::new(vec![1, 2, 1, 2, 1, 2]),
            Word::new(vec![1, -2, 2, 1]),
            Word::new(vec![2]),
        ] {
            assert_eq!(word.len() % word.cyclic_shifts().len(), 0);
        }
    }

    #[test]
    fn test_reduction_predicates() {
        assert!(Word::empty().is_cyclically_reduced());
        assert!(Word::new(vec![2]).is_cyclically_reduced());
        assert!(Word::new(vec![1, 2, 1]).is_cyclically_reduced());
        // Linear cancelling pair.
        assert!(!Word::new(vec![1, -1, 2]).is_freely_reduced());
        assert!(!Word::new(vec![1, -1, 2]).is_cyclically_reduced());
        // Freely reduced but cancels across the wrap.
        assert!(Word::new(vec![1, 2, -1]).is_freely_reduced());
        assert!(!Word::new(vec![1, 2, -1]).is_cyclically_reduced());
    }

    #[test]
    fn test_display_notation() {
        assert_eq!(Word::new(vec![1, 2, -1, -2]).to_string(), "aba'b'");
        assert_eq!(Word::new(vec![1, -2, 3, 1]).to_string(), "ab'ca");
        assert_eq!(Word::empty().to_string(), "1");
        assert_eq!(Word::new(vec![27, -27]).to_string(), "x27x27'");
    }
}
