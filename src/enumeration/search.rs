//! The online presentation search
//!
//! This module implements the backtracking enumerator of canonical
//! presentations. The search walks four nested dimensions, outermost first:
//!
//! 1. **Generator count** k = 1, 2, 3, … up to the configured bound. Each k
//!    uses the standard alphabet `[1, -1, …, k, -k]`.
//! 2. **Total relator length** n = 0, 1, 2, … for the current k. n = 0 is the
//!    relation-free presentation of the free group on k generators.
//! 3. **Length composition**: each non-decreasing split of n across relators,
//!    in the order `nondecreasing_partitions` yields them. A composition
//!    containing a part of length 1 is skipped whole, since a length-1
//!    relator always eliminates its leading generator.
//! 4. **Relator contents**: for each slot of the composition, a depth-first
//!    construction of the relator letter by letter in alphabet order.
//!
//! The innermost dimension is where the online requirement lives: every
//! partial word is checked with `prefix_is_viable` the moment a letter is
//! appended, so a branch whose candidate is already known to be non-canonical
//! is abandoned without being completed. Two more prunes apply while a word
//! is being built: when the previous relator in the presentation has the same
//! length, the candidate may not fall below it (the relation list must ascend
//! strictly), and a completed candidate must pass the full canonical relator
//! test before the search descends into the next slot.
//!
//! Every emitted presentation therefore satisfies all presentation
//! invariants by construction; nothing is filtered after the fact. The
//! enumerator is lazy and restartable: cells are expanded only as the caller
//! consumes presentations, and a fresh enumerator replays the identical
//! sequence.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::fpg::{is_canonical_relator, prefix_is_viable, Alphabet, Presentation, ShortLex, Word};

use super::partition::nondecreasing_partitions;
use super::profile::SearchProfile;

/// Limits for the presentation search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Largest generator count to visit (inclusive).
    pub max_generators: usize,
    /// Largest total relator length to visit within each generator count
    /// (inclusive).
    pub max_total_length: usize,
    /// Collect search statistics (zero overhead when false).
    pub enable_profiling: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_generators: 2,
            max_total_length: 4,
            enable_profiling: false,
        }
    }
}

/// Enumerate every canonical presentation within the configured limits.
pub fn enumerate_presentations(config: SearchConfig) -> PresentationEnumerator {
    PresentationEnumerator::new(config)
}

/// Lazy enumerator of canonical presentations.
///
/// Implements `Iterator`; presentations are produced cell by cell in the
/// order described in the module documentation. Dropping the enumerator at
/// any point is free — no state escapes a branch.
pub struct PresentationEnumerator {
    config: SearchConfig,
    generators: usize,
    total_length: usize,
    pending: VecDeque<Presentation>,
    profile: Option<SearchProfile>,
    done: bool,
}

impl PresentationEnumerator {
    pub fn new(config: SearchConfig) -> Self {
        let done = config.max_generators == 0;
        let profile = config.enable_profiling.then(SearchProfile::default);
        PresentationEnumerator {
            config,
            generators: 1,
            total_length: 0,
            pending: VecDeque::new(),
            profile,
            done,
        }
    }

    /// Statistics collected so far, when profiling is enabled.
    pub fn profile(&self) -> Option<&SearchProfile> {
        self.profile.as_ref()
    }

    /// Expand the current (k, n) cell into `pending`, then step to the next
    /// cell: n advances within k, k advances when n is exhausted.
    fn advance_cell(&mut self) {
        let alphabet = Alphabet::standard(self.generators as u32);
        let total = self.total_length;
        if let Some(profile) = self.profile.as_mut() {
            profile.cells_visited += 1;
        }
        self.enumerate_cell(&alphabet, total);

        if self.total_length < self.config.max_total_length {
            self.total_length += 1;
        } else if self.generators < self.config.max_generators {
            self.generators += 1;
            self.total_length = 0;
        } else {
            self.done = true;
        }
    }

    fn enumerate_cell(&mut self, alphabet: &Alphabet, total: usize) {
        if total == 0 {
            self.emit(Presentation::new_unchecked(alphabet.clone(), Vec::new()));
            return;
        }
        for composition in nondecreasing_partitions(total) {
            // The parts are non-decreasing, so the first is the smallest.
            if composition[0] < 2 {
                if let Some(profile) = self.profile.as_mut() {
                    profile.compositions_skipped += 1;
                }
                continue;
            }
            if let Some(profile) = self.profile.as_mut() {
                profile.compositions_visited += 1;
            }
            let mut relators = Vec::with_capacity(composition.len());
            self.search_slot(alphabet, &composition, 0, &mut relators);
        }
    }

    /// Fill the relator slot at `slot`; emit a presentation once every slot
    /// of the composition has been realized.
    fn search_slot(
        &mut self,
        alphabet: &Alphabet,
        composition: &[usize],
        slot: usize,
        relators: &mut Vec<Word>,
    ) {
        if slot == composition.len() {
            self.emit(Presentation::new_unchecked(
                alphabet.clone(),
                relators.clone(),
            ));
            return;
        }
        // With equal consecutive lengths the relation list must still ascend
        // strictly, so the previous relator bounds this slot from below.
        let bound = match relators.last() {
            Some(previous) if previous.len() == composition[slot] => {
                Some(previous.letters().to_vec())
            }
            _ => None,
        };
        let mut letters = Vec::with_capacity(composition[slot]);
        self.extend_relator(
            alphabet,
            composition,
            slot,
            bound.as_deref(),
            &mut letters,
            relators,
        );
    }

    /// Depth-first construction of one relator, one letter at a time.
    fn extend_relator(
        &mut self,
        alphabet: &Alphabet,
        composition: &[usize],
        slot: usize,
        bound: Option<&[i32]>,
        letters: &mut Vec<i32>,
        relators: &mut Vec<Word>,
    ) {
        let target_len = composition[slot];
        if letters.len() == target_len {
            if let Some(profile) = self.profile.as_mut() {
                profile.candidates_completed += 1;
            }
            let word = Word::new(letters.clone());
            if is_canonical_relator(&word, alphabet) {
                if let Some(profile) = self.profile.as_mut() {
                    profile.relators_accepted += 1;
                }
                relators.push(word);
                self.search_slot(alphabet, composition, slot + 1, relators);
                relators.pop();
            }
            return;
        }
        for letter in alphabet.iter() {
            letters.push(letter);
            if self.candidate_viable(alphabet, letters, target_len, bound) {
                self.extend_relator(alphabet, composition, slot, bound, letters, relators);
            } else if let Some(profile) = self.profile.as_mut() {
                profile.prefixes_pruned += 1;
            }
            letters.pop();
        }
    }

    /// Online acceptance test for a partial relator: the lower-bound prune
    /// against the previous equal-length relator, then the canonical prefix
    /// viability test.
    fn candidate_viable(
        &self,
        alphabet: &Alphabet,
        letters: &[i32],
        target_len: usize,
        bound: Option<&[i32]>,
    ) -> bool {
        if let Some(bound) = bound {
            let shortlex = ShortLex::new(alphabet);
            match shortlex.compare_letters(letters, &bound[..letters.len()]) {
                Ordering::Less => return false,
                // Completing equal to the previous relator would duplicate it.
                Ordering::Equal if letters.len() == target_len => return false,
                _ => {}
            }
        }
        prefix_is_viable(letters, target_len, alphabet)
    }

    fn emit(&mut self, presentation: Presentation) {
        if let Some(profile) = self.profile.as_mut() {
            profile.presentations_emitted += 1;
        }
        self.pending.push_back(presentation);
    }
}

impl Iterator for PresentationEnumerator {
    type Item = Presentation;

    fn next(&mut self) -> Option<Presentation> {
        loop {
            if let Some(presentation) = self.pending.pop_front() {
                return Some(presentation);
            }
            if self.done {
                return None;
            }
            self.advance_cell();
        }
    }
}
