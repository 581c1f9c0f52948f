//! Search statistics
//!
//! Counters collected during enumeration when `SearchConfig::enable_profiling`
//! is set. Zero overhead when disabled — all instrumentation is gated on
//! `Option::None`.

use serde::{Deserialize, Serialize};

/// Counters describing one enumeration run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchProfile {
    /// (generator count, total length) cells visited.
    pub cells_visited: usize,
    /// Length compositions expanded into a word search.
    pub compositions_visited: usize,
    /// Compositions skipped whole because they contain a length-1 part.
    pub compositions_skipped: usize,
    /// Partial words abandoned by the prefix viability test.
    pub prefixes_pruned: usize,
    /// Completed candidate words submitted to the full relator test.
    pub candidates_completed: usize,
    /// Completed candidates accepted as relators.
    pub relators_accepted: usize,
    /// Presentations emitted.
    pub presentations_emitted: usize,
}
