//! Grammar symbols of the toy-English sentence grammar.
//!
//! ```text
//! <S>        ::= <NP> <V> <NP> ( <PNP> | <CON> <S> )? <EOS>
//! <NP>       ::= <A> <AN> <ADVERB>?
//! <PNP>      ::= <PREP> <NP>
//! <AN>       ::= <ADJ_TAIL>? <N>
//! <ADJ_TAIL> ::= <ADJ> ( ',' <ADJ_TAIL> )?
//! ```

use core::fmt;

use crate::category::TokenCategory;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text of the divider between chained adjectives.
pub const ADJECTIVE_DIVIDER: &str = ",";

/// Sentinel appended to every sentence line before tokenization.
pub const EOS_MARKER: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    // Non-terminals
    Sentence,
    NounPhrase,
    PrepositionalNounPhrase,
    AdjNoun,
    AdjectiveTail,

    // Terminals
    Verb,
    Noun,
    Article,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    EndOfSentence,
}

impl Symbol {
    pub const fn label(self) -> &'static str {
        match self {
            Symbol::Sentence => "<S>",
            Symbol::NounPhrase => "<NP>",
            Symbol::PrepositionalNounPhrase => "<PNP>",
            Symbol::AdjNoun => "<AN>",
            Symbol::AdjectiveTail => "<ADJ_TAIL>",
            Symbol::Verb => "<V>",
            Symbol::Noun => "<N>",
            Symbol::Article => "<A>",
            Symbol::Adjective => "<ADJ>",
            Symbol::Adverb => "<ADVERB>",
            Symbol::Preposition => "<PREP>",
            Symbol::Conjunction => "<CON>",
            Symbol::EndOfSentence => "<EOS>",
        }
    }

    /// Category consumed by a terminal symbol, `None` for non-terminals.
    pub const fn terminal_category(self) -> Option<TokenCategory> {
        match self {
            Symbol::Verb => Some(TokenCategory::Verb),
            Symbol::Noun => Some(TokenCategory::Noun),
            Symbol::Article => Some(TokenCategory::Article),
            Symbol::Adjective => Some(TokenCategory::Adjective),
            Symbol::Adverb => Some(TokenCategory::Adverb),
            Symbol::Preposition => Some(TokenCategory::Preposition),
            Symbol::Conjunction => Some(TokenCategory::Conjunction),
            Symbol::EndOfSentence => Some(TokenCategory::EndOfSentence),
            Symbol::Sentence
            | Symbol::NounPhrase
            | Symbol::PrepositionalNounPhrase
            | Symbol::AdjNoun
            | Symbol::AdjectiveTail => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
