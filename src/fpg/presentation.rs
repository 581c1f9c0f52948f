//! Group presentations

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{PresAtlasError, Result};

use super::alphabet::Alphabet;
use super::canonical::is_canonical_relator;
use super::ordering::ShortLex;
use super::word::{write_letter, Word};

/// A finite group presentation: a generator alphabet plus defining relators.
///
/// Invariants: every relation is drawn from the alphabet and is a canonical
/// relator, and the relation list is in strictly ascending shortlex order
/// (which also rules out duplicates). `new` enforces them; the search
/// guarantees them by construction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    alphabet: Alphabet,
    relations: Vec<Word>,
}

impl Presentation {
    /// Build a presentation, validating every invariant.
    pub fn new(alphabet: Alphabet, relations: Vec<Word>) -> Result<Self> {
        for relation in &relations {
            alphabet.check_word(relation)?;
        }
        let shortlex = ShortLex::new(&alphabet);
        for pair in relations.windows(2) {
            if shortlex.compare(&pair[0], &pair[1]) != Ordering::Less {
                return Err(PresAtlasError::UnorderedRelations);
            }
        }
        for relation in &relations {
            if !is_canonical_relator(relation, &alphabet) {
                return Err(PresAtlasError::NonCanonicalRelator(relation.to_string()));
            }
        }
        Ok(Presentation {
            alphabet,
            relations,
        })
    }

    /// Build without validation. The search only emits presentations whose
    /// invariants hold by construction.
    pub(crate) fn new_unchecked(alphabet: Alphabet, relations: Vec<Word>) -> Self {
        Presentation {
            alphabet,
            relations,
        }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn relations(&self) -> &[Word] {
        &self.relations
    }

    pub fn generator_count(&self) -> usize {
        self.alphabet.generator_count()
    }

    /// Combined length of all relations.
    pub fn total_relation_length(&self) -> usize {
        self.relations.iter().map(Word::len).sum()
    }
}

impl fmt::Display for Presentation {
    /// Angle-bracket notation: `<a, b | aa, abab'>`, `<a | >` when free.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, generator) in self.alphabet.generators().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_letter(f, generator)?;
        }
        write!(f, " | ")?;
        for (i, relation) in self.relations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{relation}")?;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validating_constructor() {
        let alphabet = Alphabet::standard(2);
        assert!(Presentation::new(alphabet.clone(), vec![]).is_ok());
        assert!(Presentation::new(
            alphabet.clone(),
            vec![Word::new(vec![1, 1]), Word::new(vec![2, 2])]
        )
        .is_ok());
        // Out of order.
        assert!(Presentation::new(
            alphabet.clone(),
            vec![Word::new(vec![2, 2]), Word::new(vec![1, 1])]
        )
        .is_err());
        // Duplicate.
        assert!(Presentation::new(
            alphabet.clone(),
            vec![Word::new(vec![1, 1]), Word::new(vec![1, 1])]
        )
        .is_err());
        // Non-canonical relator (generator-eliminating).
        assert!(Presentation::new(alphabet.clone(), vec![Word::new(vec![1, 2, 2])]).is_err());
        // Symbol outside the alphabet.
        assert!(Presentation::new(alphabet, vec![Word::new(vec![3, 3])]).is_err());
    }

    #[test]
    fn test_accessors() {
        let presentation = Presentation::new(
            Alphabet::standard(2),
            vec![Word::new(vec![1, 1]), Word::new(vec![1, 2, -1, -2])],
        )
        .unwrap();
        assert_eq!(presentation.generator_count(), 2);
        assert_eq!(presentation.total_relation_length(), 6);
        assert_eq!(presentation.relations().len(), 2);
    }

    #[test]
    fn test_display_notation() {
        let free = Presentation::new(Alphabet::standard(1), vec![]).unwrap();
        assert_eq!(free.to_string(), "<a | >");
        let presentation = Presentation::new(
            Alphabet::standard(2),
            vec![Word::new(vec![1, 1]), Word::new(vec![1, 2, -1, -2])],
        )
        .unwrap();
        assert_eq!(presentation.to_string(), "<a, b | aa, aba'b'>");
    }
}
