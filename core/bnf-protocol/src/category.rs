use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lexical category of a classified word.
///
/// The set is closed. A word belongs to at most one category; anything the
/// vocabulary does not list is `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum TokenCategory {
    Article = 0,
    Noun = 1,
    Verb = 2,
    Adjective = 3,
    Adverb = 4,
    Preposition = 5,
    Conjunction = 6,
    AdjectiveDivider = 7,
    EndOfSentence = 8,
    /// The line has no words left.
    EndOfSentenceMarker = 9,
    Unrecognized = 10,
}

impl TokenCategory {
    /// Categories that are populated from vocabulary word lists.
    pub const fn is_word_class(self) -> bool {
        matches!(
            self,
            TokenCategory::Article
                | TokenCategory::Noun
                | TokenCategory::Verb
                | TokenCategory::Adjective
                | TokenCategory::Adverb
                | TokenCategory::Preposition
                | TokenCategory::Conjunction
        )
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Article => "ARTICLE",
            TokenCategory::Noun => "NOUN",
            TokenCategory::Verb => "VERB",
            TokenCategory::Adjective => "ADJECTIVE",
            TokenCategory::Adverb => "ADVERB",
            TokenCategory::Preposition => "PREPOSITION",
            TokenCategory::Conjunction => "CONJUNCTION",
            TokenCategory::AdjectiveDivider => "ADJECTIVE_DIVIDER",
            TokenCategory::EndOfSentence => "END_OF_SENTENCE",
            TokenCategory::EndOfSentenceMarker => "END_OF_SENTENCE_MARKER",
            TokenCategory::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
