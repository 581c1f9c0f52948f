//! Word successors and ordered word streams
//!
//! A fixed-length word is treated as a mixed-radix counter over its
//! alphabet's letter order; iterating the odometer successor from the
//! all-first-letter word visits every word of that length exactly once, in
//! shortlex order, before rolling over. The shortlex successor extends this
//! across lengths, giving an unbounded enumeration of all finite words.

use crate::fpg::{Alphabet, Word};

/// The fixed-length mixed-radix successor of `word` under the alphabet's
/// letter order.
///
/// The last letter advances to its successor; a letter already at the
/// alphabet's greatest symbol resets to the least symbol and carries into the
/// position to its left. The greatest word of a length rolls over to the
/// least word of the same length. Pure and total; the empty word is its own
/// successor.
pub fn odometer_successor(word: &Word, alphabet: &Alphabet) -> Word {
    let mut letters = word.letters().to_vec();
    let Some(first) = alphabet.first() else {
        return Word::new(letters);
    };
    for i in (0..letters.len()).rev() {
        match alphabet.symbol(alphabet.rank(letters[i]) + 1) {
            Some(next) => {
                letters[i] = next;
                return Word::new(letters);
            }
            None => letters[i] = first,
        }
    }
    Word::new(letters)
}

/// The successor of `word` in the shortlex order over all finite words.
///
/// The greatest word of each length (every letter the alphabet's last symbol)
/// is followed by the least word one letter longer; every other word is
/// followed by its odometer successor. Iterating from the empty word yields
/// every finite word exactly once, in strictly increasing shortlex order.
pub fn shortlex_successor(word: &Word, alphabet: &Alphabet) -> Word {
    let Some(first) = alphabet.first() else {
        return Word::empty();
    };
    let all_last = word.letters().iter().all(|&l| Some(l) == alphabet.last());
    if all_last {
        Word::new(vec![first; word.len() + 1])
    } else {
        odometer_successor(word, alphabet)
    }
}

/// Every word of one fixed length over an alphabet, in shortlex order.
pub struct WordsOfLength<'a> {
    alphabet: &'a Alphabet,
    next: Option<Word>,
}

impl<'a> WordsOfLength<'a> {
    pub fn new(len: usize, alphabet: &'a Alphabet) -> Self {
        let next = if len == 0 {
            Some(Word::empty())
        } else {
            alphabet.first().map(|first| Word::new(vec![first; len]))
        };
        WordsOfLength { alphabet, next }
    }
}

impl Iterator for WordsOfLength<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let current = self.next.take()?;
        let is_greatest = current
            .letters()
            .iter()
            .all(|&l| Some(l) == self.alphabet.last());
        if !is_greatest {
            self.next = Some(odometer_successor(&current, self.alphabet));
        }
        Some(current)
    }
}

/// Every finite word over an alphabet, in shortlex order, starting from the
/// empty word. Unbounded for non-empty alphabets; restart by constructing a
/// fresh iterator.
pub struct ShortLexWords<'a> {
    alphabet: &'a Alphabet,
    next: Option<Word>,
}

impl<'a> ShortLexWords<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        ShortLexWords {
            alphabet,
            next: Some(Word::empty()),
        }
    }
}

impl Iterator for ShortLexWords<'_> {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let current = self.next.take()?;
        if !self.alphabet.is_empty() {
            self.next = Some(shortlex_successor(&current, self.alphabet));
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odometer_successor() {
        let alphabet = Alphabet::standard(2);
        let succ = |letters: Vec<i32>| odometer_successor(&Word::new(letters), &alphabet);
        assert_eq!(succ(vec![1, 1]), Word::new(vec![1, -1]));
        assert_eq!(succ(vec![1, -2]), Word::new(vec![-1, 1]));
        assert_eq!(succ(vec![1, -2, -2]), Word::new(vec![-1, 1, 1]));
        // The greatest word rolls over to the least.
        assert_eq!(succ(vec![-2, -2]), Word::new(vec![1, 1]));
        assert_eq!(succ(vec![]), Word::empty());
    }

    #[test]
    fn test_odometer_visits_every_word_once() {
        let alphabet = Alphabet::standard(2);
        let mut seen = std::collections::HashSet::new();
        let mut word = Word::new(vec![1, 1, 1]);
        for _ in 0..64 {
            assert!(seen.insert(word.clone()));
            word = odometer_successor(&word, &alphabet);
        }
        // 4^3 words of length 3, then the rollover.
        assert_eq!(seen.len(), 64);
        assert_eq!(word, Word::new(vec![1, 1, 1]));
    }

    #[test]
    fn test_shortlex_successor_sequence() {
        let alphabet = Alphabet::standard(1);
        let mut word = Word::empty();
        let mut sequence = Vec::new();
        for _ in 0..6 {
            sequence.push(word.clone());
            word = shortlex_successor(&word, &alphabet);
        }
        assert_eq!(
            sequence,
            vec![
                Word::empty(),
                Word::new(vec![1]),
                Word::new(vec![-1]),
                Word::new(vec![1, 1]),
                Word::new(vec![1, -1]),
                Word::new(vec![-1, 1]),
            ]
        );
    }

    #[test]
    fn test_words_of_length_iterator() {
        let alphabet = Alphabet::standard(2);
        let words: Vec<Word> = WordsOfLength::new(2, &alphabet).collect();
        assert_eq!(words.len(), 16);
        assert_eq!(words[0], Word::new(vec![1, 1]));
        assert_eq!(words[15], Word::new(vec![-2, -2]));
        // Length zero yields exactly the empty word.
        let empties: Vec<Word> = WordsOfLength::new(0, &alphabet).collect();
        assert_eq!(empties, vec![Word::empty()]);
    }

    #[test]
    fn test_shortlex_words_iterator_matches_successor() {
        let alphabet = Alphabet::standard(2);
        let stream: Vec<Word> = ShortLexWords::new(&alphabet).take(30).collect();
        assert_eq!(stream[0], Word::empty());
        let shortlex = crate::fpg::ShortLex::new(&alphabet);
        for pair in stream.windows(2) {
            assert!(shortlex.precedes(&pair[0], &pair[1]));
        }
        // The empty alphabet admits only the empty word.
        let empty = Alphabet::standard(0);
        let only: Vec<Word> = ShortLexWords::new(&empty).collect();
        assert_eq!(only, vec![Word::empty()]);
    }
}
