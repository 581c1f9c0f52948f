//! JSON serialization types for enumeration output

use serde::{Deserialize, Serialize};

use crate::enumeration::SearchProfile;
use crate::fpg::{Presentation, Word};

/// JSON representation of a word
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordJson {
    pub letters: Vec<i32>,
    pub notation: String,
}

impl From<&Word> for WordJson {
    fn from(word: &Word) -> Self {
        WordJson {
            letters: word.letters().to_vec(),
            notation: word.to_string(),
        }
    }
}

/// JSON representation of a presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationJson {
    pub generators: usize,
    pub alphabet: Vec<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub relations: Vec<WordJson>,
    pub notation: String,
}

impl From<&Presentation> for PresentationJson {
    fn from(presentation: &Presentation) -> Self {
        PresentationJson {
            generators: presentation.generator_count(),
            alphabet: presentation.alphabet().iter().collect(),
            relations: presentation.relations().iter().map(WordJson::from).collect(),
            notation: presentation.to_string(),
        }
    }
}

/// JSON representation of a finished enumeration run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumerationJson {
    pub presentations: Vec<PresentationJson>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub profile: Option<SearchProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fpg::Alphabet;

    #[test]
    fn test_presentation_to_json() {
        let presentation = Presentation::new(
            Alphabet::standard(2),
            vec![Word::new(vec![1, 1]), Word::new(vec![2, 2])],
        )
        .unwrap();
        let json = PresentationJson::from(&presentation);
        assert_eq!(json.generators, 2);
        assert_eq!(json.alphabet, vec![1, -1, 2, -2]);
        assert_eq!(json.relations[0].notation, "aa");
        assert_eq!(json.notation, "<a, b | aa, bb>");

        let text = serde_json::to_string(&json).unwrap();
        assert!(text.contains("\"notation\":\"<a, b | aa, bb>\""));
    }
}
