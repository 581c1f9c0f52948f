//! Letter-notation parsing for words and presentations

pub mod notation;

// Re-export main parsing functions
pub use notation::{parse_presentation, parse_word};
