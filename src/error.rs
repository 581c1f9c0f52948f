//! Error types for PresAtlas

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresAtlasError {
    #[error("parse error: {0}")]
    ParseError(String),

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("symbol {symbol} is not in the alphabet")]
    SymbolOutsideAlphabet { symbol: i32 },

    #[error("relation list is not in strictly ascending shortlex order")]
    UnorderedRelations,

    #[error("relator {0} is not canonical for its alphabet")]
    NonCanonicalRelator(String),
}

pub type Result<T> = std::result::Result<T, PresAtlasError>;
