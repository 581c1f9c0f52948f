//! PresAtlas: canonical enumeration of finite group presentations
//!
//! This library enumerates finitely presented groups — a symmetrized
//! generating set plus a list of defining relators — in increasing shortlex
//! order, up to bounds on generator count and total relator length, skipping
//! presentations that are obviously isomorphic to an earlier one.
//!
//! Obvious isomorphism is detected purely syntactically: every emitted
//! relator is cyclically reduced, least among its cyclic shifts and their
//! inverses, and never of the shape that makes a generator redundant; the
//! relation list itself ascends in shortlex order. Nothing stronger is
//! attempted — deciding whether two finite presentations give isomorphic
//! groups (or even whether one gives the trivial group) is undecidable, so
//! the enumeration tolerates duplicates that are not syntactically visible.
//!
//! The search is online: a candidate relator is abandoned as soon as a prefix
//! rules it out, not generated in full and filtered afterwards.

pub mod enumeration;
pub mod error;
pub mod fpg;
pub mod json;
pub mod parser;

// Re-export commonly used types from fpg
pub use fpg::{
    eliminates_generator, is_canonical_relator, is_cyclic_inverse_minimal, prefix_is_viable,
    Alphabet, Presentation, ShortLex, Word,
};

// Re-export enumeration types
pub use enumeration::{
    enumerate_presentations, nondecreasing_partitions, odometer_successor, shortlex_successor,
    PresentationEnumerator, SearchConfig, SearchProfile, ShortLexWords, WordsOfLength,
};

pub use error::{PresAtlasError, Result};

pub use json::{EnumerationJson, PresentationJson, WordJson};

pub use parser::{parse_presentation, parse_word};
