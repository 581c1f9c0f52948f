//! Finitely presented group data structures
//!
//! This module provides the fundamental types for working with group
//! presentations: generator alphabets, words in the free group, the shortlex
//! order, the canonical relator tests, and presentations themselves.

pub mod alphabet;
pub mod canonical;
pub mod ordering;
pub mod presentation;
pub mod word;

// Re-export commonly used types
pub use alphabet::Alphabet;
pub use canonical::{
    eliminates_generator, is_canonical_relator, is_cyclic_inverse_minimal, prefix_is_viable,
};
pub use ordering::ShortLex;
pub use presentation::Presentation;
pub use word::Word;
