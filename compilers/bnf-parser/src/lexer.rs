use bnf_protocol::{TokenCategory, Vocabulary};
use tracing::trace;

use crate::scanner::next_word;
use crate::token::Span;

/// Pull-based token classifier over one line at a time.
///
/// One lexer is reused across lines; [`Lexer::start`] fully resets it. It holds
/// mutable cursor state and must not be shared between sentences in flight.
#[derive(Debug, Clone)]
pub struct Lexer<'v> {
    vocab: &'v Vocabulary,
    source: String,
    cursor: usize,
    category: TokenCategory,
    span: Span,
}

impl<'v> Lexer<'v> {
    pub fn new(vocab: &'v Vocabulary) -> Self {
        Self {
            vocab,
            source: String::new(),
            cursor: 0,
            category: TokenCategory::EndOfSentenceMarker,
            span: Span::default(),
        }
    }

    /// Reset to tokenize `line` and classify its first word.
    pub fn start(&mut self, line: &str) {
        self.source.clear();
        self.source.push_str(line);
        self.cursor = 0;
        self.advance();
    }

    /// Consume the next word and classify it.
    ///
    /// Once the line is exhausted the category stays `END_OF_SENTENCE_MARKER`
    /// with an empty lexeme.
    pub fn advance(&mut self) {
        match next_word(&self.source, self.cursor) {
            Some((span, word, next)) => {
                self.category = self.vocab.classify(word);
                self.span = span;
                self.cursor = next;
                trace!(word, category = %self.category, "classified");
            }
            None => {
                self.category = TokenCategory::EndOfSentenceMarker;
                self.cursor = self.source.len();
                self.span = Span::empty_at(self.cursor);
            }
        }
    }

    pub fn current_category(&self) -> TokenCategory {
        self.category
    }

    pub fn current_lexeme(&self) -> &str {
        &self.source[self.span.start..self.span.end]
    }

    pub fn current_span(&self) -> Span {
        self.span
    }
}
