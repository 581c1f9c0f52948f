//! Parser for the letter notation of words and presentations
//!
//! Words are written one letter per generator with an apostrophe marking an
//! inverse: `aba'b'` is the word [1, 2, -1, -2]. A standalone `1` is the
//! empty word. Presentations are written `<a, b | aa, abab'>`; the generator
//! list must be the consecutive letters a, b, c, … and fixes a standard
//! alphabet.

use nom::{
    branch::alt,
    character::complete::{char, multispace0, satisfy},
    combinator::{all_consuming, map, opt},
    multi::{many1, separated_list0, separated_list1},
    IResult,
};

use crate::error::{PresAtlasError, Result};
use crate::fpg::{Alphabet, Presentation, Word};

/// Parse a word in letter notation, checking it against `alphabet`.
pub fn parse_word(input: &str, alphabet: &Alphabet) -> Result<Word> {
    let (_, letters) = all_consuming(word_body)(input.trim())
        .map_err(|e| PresAtlasError::ParseError(format!("{e:?}")))?;
    let word = Word::new(letters);
    alphabet.check_word(&word)?;
    Ok(word)
}

/// Parse a presentation in angle-bracket notation.
///
/// The result is validated: relations must be canonical relators listed in
/// strictly ascending shortlex order.
pub fn parse_presentation(input: &str) -> Result<Presentation> {
    let (_, (generators, words)) = all_consuming(presentation_body)(input.trim())
        .map_err(|e| PresAtlasError::ParseError(format!("{e:?}")))?;
    for (i, &generator) in generators.iter().enumerate() {
        if (generator as usize) != ('a' as usize) + i {
            return Err(PresAtlasError::ParseError(format!(
                "generators must be the consecutive letters a, b, c, …; found '{generator}'"
            )));
        }
    }
    let alphabet = Alphabet::standard(generators.len() as u32);
    let relations = words.into_iter().map(Word::new).collect();
    Presentation::new(alphabet, relations)
}

/// One letter: a lowercase character, optionally followed by an apostrophe
/// for the inverse.
fn letter(input: &str) -> IResult<&str, i32> {
    let (input, c) = satisfy(|c| c.is_ascii_lowercase())(input)?;
    let (input, inverse) = opt(char('\''))(input)?;
    let id = (c as u8 - b'a') as i32 + 1;
    Ok((input, if inverse.is_some() { -id } else { id }))
}

/// A word: the identity symbol `1`, or one or more letters.
fn word_body(input: &str) -> IResult<&str, Vec<i32>> {
    alt((map(char('1'), |_| Vec::new()), many1(letter)))(input)
}

fn generator_name(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_lowercase())(input)
}

fn comma(input: &str) -> IResult<&str, ()> {
    let (input, _) = multispace0(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, ()))
}

fn presentation_body(input: &str) -> IResult<&str, (Vec<char>, Vec<Vec<i32>>)> {
    let (input, _) = char('<')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, generators) = separated_list1(comma, generator_name)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('|')(input)?;
    let (input, _) = multispace0(input)?;
    let (input, words) = separated_list0(comma, word_body)(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('>')(input)?;
    Ok((input, (generators, words)))
}
