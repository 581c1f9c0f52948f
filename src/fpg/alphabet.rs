//! Ordered symmetrized generator alphabets

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{PresAtlasError, Result};

use super::word::Word;

/// An ordered, inverse-closed set of generator symbols.
///
/// Symbols are nonzero integers; the negation of a symbol denotes the inverse
/// of the corresponding generator (0 is reserved for the group identity and
/// never appears in an alphabet or a word). Insertion order is significant:
/// it is the letter order underlying shortlex comparison, so two alphabets
/// with the same symbols in different orders are not interchangeable.
/// Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alphabet {
    symbols: IndexSet<i32>,
}

/// Equality is order-sensitive: the same symbols in a different order induce
/// a different shortlex order and are a different alphabet.
impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols.iter().eq(other.symbols.iter())
    }
}

impl Eq for Alphabet {}

impl Alphabet {
    /// The standard alphabet on `n` generators: `[1, -1, 2, -2, …, n, -n]`.
    ///
    /// `n = 0` gives the empty alphabet.
    pub fn standard(n: u32) -> Self {
        let mut symbols = IndexSet::with_capacity(2 * n as usize);
        for i in 1..=n as i32 {
            symbols.insert(i);
            symbols.insert(-i);
        }
        Alphabet { symbols }
    }

    /// Build an alphabet from an explicit symbol order.
    ///
    /// Rejects zero, duplicate symbols, and symbols whose inverse is absent.
    pub fn new(symbols: Vec<i32>) -> Result<Self> {
        let mut set = IndexSet::with_capacity(symbols.len());
        for symbol in symbols {
            if symbol == 0 {
                return Err(PresAtlasError::InvalidAlphabet(
                    "0 is reserved for the identity".to_string(),
                ));
            }
            if !set.insert(symbol) {
                return Err(PresAtlasError::InvalidAlphabet(format!(
                    "duplicate symbol {symbol}"
                )));
            }
        }
        for &symbol in &set {
            if !set.contains(&-symbol) {
                return Err(PresAtlasError::InvalidAlphabet(format!(
                    "symbol {symbol} has no inverse"
                )));
            }
        }
        Ok(Alphabet { symbols: set })
    }

    /// Number of symbols (generators and inverses together).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of generators (half the symbol count).
    pub fn generator_count(&self) -> usize {
        self.symbols.len() / 2
    }

    pub fn contains(&self, symbol: i32) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Rank of a symbol in the letter order, if present.
    pub fn position(&self, symbol: i32) -> Option<usize> {
        self.symbols.get_index_of(&symbol)
    }

    /// Rank of a symbol in the letter order.
    ///
    /// Panics if the symbol is not in the alphabet; callers are expected to
    /// only rank letters of words drawn from this alphabet.
    pub fn rank(&self, symbol: i32) -> usize {
        match self.symbols.get_index_of(&symbol) {
            Some(rank) => rank,
            None => panic!("symbol {symbol} is not in the alphabet"),
        }
    }

    /// The symbol at a given rank, if any.
    pub fn symbol(&self, rank: usize) -> Option<i32> {
        self.symbols.get_index(rank).copied()
    }

    /// The least symbol in the letter order.
    pub fn first(&self) -> Option<i32> {
        self.symbols.first().copied()
    }

    /// The greatest symbol in the letter order.
    pub fn last(&self) -> Option<i32> {
        self.symbols.last().copied()
    }

    /// All symbols in letter order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.symbols.iter().copied()
    }

    /// The positive generator symbols, in letter order.
    pub fn generators(&self) -> impl Iterator<Item = i32> + '_ {
        self.symbols.iter().copied().filter(|&s| s > 0)
    }

    /// Check that every letter of `word` is drawn from this alphabet.
    pub fn check_word(&self, word: &Word) -> Result<()> {
        for &letter in word.letters() {
            if !self.contains(letter) {
                return Err(PresAtlasError::SymbolOutsideAlphabet { symbol: letter });
            }
        }
        Ok(())
    }
}
