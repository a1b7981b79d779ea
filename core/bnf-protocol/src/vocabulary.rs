use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::category::TokenCategory;
use crate::grammar::{ADJECTIVE_DIVIDER, EOS_MARKER};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One category together with the words that belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordClass {
    pub category: TokenCategory,
    pub words: Vec<String>,
}

impl WordClass {
    pub fn new(category: TokenCategory, words: &[&str]) -> Self {
        Self {
            category,
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// The closed word lists the lexer classifies against.
///
/// Classes are consulted in listed order, so when a word appears in more than
/// one class the first listed class wins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vocabulary {
    pub version: u32,
    pub classes: Vec<WordClass>,
}

/// A word listed under more than one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub word: String,
    pub kept: TokenCategory,
    pub shadowed: TokenCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// Only the seven word categories may carry word lists.
    NotAWordClass(TokenCategory),
    EmptyWord(TokenCategory),
    /// The word would never reach the classifier as a single token.
    MalformedWord { category: TokenCategory, word: String },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyError::NotAWordClass(category) => {
                write!(f, "{} cannot be given a word list", category)
            }
            VocabularyError::EmptyWord(category) => {
                write!(f, "empty word in the {} list", category)
            }
            VocabularyError::MalformedWord { category, word } => write!(
                f,
                "'{}' in the {} list contains whitespace, '{}' or '{}'",
                word, category, ADJECTIVE_DIVIDER, EOS_MARKER
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VocabularyError {}

impl Vocabulary {
    /// The built-in toy-English vocabulary.
    pub fn standard() -> Self {
        Self {
            version: 1,
            classes: vec![
                WordClass::new(TokenCategory::Article, &["a", "the"]),
                WordClass::new(
                    TokenCategory::Noun,
                    &["dog", "cat", "rat", "mat", "house", "ball", "boy", "girl", "man", "tree"],
                ),
                WordClass::new(
                    TokenCategory::Verb,
                    &[
                        "loves", "hates", "eats", "chases", "stalks", "bit", "sat", "ran", "slept",
                        "barked", "saw", "chased",
                    ],
                ),
                WordClass::new(
                    TokenCategory::Adjective,
                    &["fast", "slow", "furry", "sneaky", "lazy", "tall", "big", "red", "angry", "small"],
                ),
                WordClass::new(
                    TokenCategory::Adverb,
                    &["quickly", "slowly", "happily", "sadly", "furiously"],
                ),
                WordClass::new(
                    TokenCategory::Preposition,
                    &["of", "on", "around", "with", "up", "near", "under", "over", "in"],
                ),
                WordClass::new(TokenCategory::Conjunction, &["and", "or", "but"]),
            ],
        }
    }

    /// Classify one scanned word. Case-sensitive, exact match.
    pub fn classify(&self, word: &str) -> TokenCategory {
        if word == ADJECTIVE_DIVIDER {
            return TokenCategory::AdjectiveDivider;
        }
        if word == EOS_MARKER {
            return TokenCategory::EndOfSentence;
        }

        self.classes
            .iter()
            .find(|class| class.contains(word))
            .map(|class| class.category)
            .unwrap_or(TokenCategory::Unrecognized)
    }

    pub fn validate(&self) -> Result<(), VocabularyError> {
        for class in &self.classes {
            if !class.category.is_word_class() {
                return Err(VocabularyError::NotAWordClass(class.category));
            }
            for word in &class.words {
                if word.is_empty() {
                    return Err(VocabularyError::EmptyWord(class.category));
                }
                if word.chars().any(char::is_whitespace)
                    || word.contains(ADJECTIVE_DIVIDER)
                    || word.contains(EOS_MARKER)
                {
                    return Err(VocabularyError::MalformedWord {
                        category: class.category,
                        word: word.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Words shadowed by an earlier class, in listed order.
    pub fn overlaps(&self) -> Vec<Overlap> {
        let mut overlaps = Vec::new();
        for (i, class) in self.classes.iter().enumerate() {
            for word in &class.words {
                let earlier = self.classes[..i]
                    .iter()
                    .find(|c| c.category != class.category && c.contains(word));
                if let Some(kept) = earlier {
                    overlaps.push(Overlap {
                        word: word.clone(),
                        kept: kept.category,
                        shadowed: class.category,
                    });
                }
            }
        }
        overlaps
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
