pub mod error;
pub mod lexer;
pub mod render;
pub mod scanner;
pub mod syntax;
pub mod token;
pub mod tree;

use bnf_protocol::{Vocabulary, EOS_MARKER};

pub use error::SyntaxError;
pub use lexer::Lexer;
pub use syntax::{analyze, Analysis};
pub use tree::{DerivationEdge, DerivationTree, EdgeTarget};

/// Primary entry point: one sentence line -> derivation tree and verdict.
///
/// Appends the sentinel and parses with a fresh lexer.
pub fn check_sentence(vocab: &Vocabulary, line: &str) -> Analysis {
    let mut lexer = Lexer::new(vocab);
    lexer.start(&with_sentinel(line));
    analyze(&mut lexer)
}

/// `line` terminated by the end-of-sentence sentinel.
pub fn with_sentinel(line: &str) -> String {
    format!("{line} {EOS_MARKER}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bnf_protocol::TokenCategory;

    #[test]
    fn test_check_sentence_integration() {
        let vocab = Vocabulary::standard();

        let accepted = check_sentence(&vocab, "the furry cat quickly stalks a sneaky rat");
        assert!(accepted.is_accepted(), "{:?}", accepted.error());

        let rejected = check_sentence(&vocab, "the cat stalks");
        let err = rejected.error().expect("rejected");
        assert_eq!(err.expected, TokenCategory::Article);
        assert_eq!(err.found, ".");
    }

    #[test]
    fn test_with_sentinel() {
        assert_eq!(with_sentinel("the dog bit the rat"), "the dog bit the rat .");
    }
}
