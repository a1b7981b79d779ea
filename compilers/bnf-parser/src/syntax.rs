use bnf_protocol::{NodeId, Symbol, TokenCategory};
use tracing::debug;

use crate::error::SyntaxError;
use crate::lexer::Lexer;
use crate::tree::DerivationTree;

/// Result of parsing one sentence.
///
/// The tree is kept on rejection too: it then ends in a rejection edge at the
/// point of failure.
pub struct Analysis {
    pub tree: DerivationTree,
    pub outcome: Result<(), SyntaxError>,
}

impl Analysis {
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&SyntaxError> {
        self.outcome.as_ref().err()
    }
}

/// Top-down, left-to-right recursive-descent parser.
///
/// One method per grammar rule. Each takes the id of the node that invoked it,
/// allocates its own node, and works against the explicitly borrowed lexer.
/// The first terminal mismatch returns an error that unwinds every open rule.
pub struct SyntaxAnalyzer<'l, 'v> {
    lexer: &'l mut Lexer<'v>,
    tree: DerivationTree,
}

/// Parse the sentence the lexer was started on, beginning at `<S>`.
pub fn analyze(lexer: &mut Lexer<'_>) -> Analysis {
    let mut parser = SyntaxAnalyzer::new(lexer);
    let root = parser.tree.root();
    let outcome = parser.sentence(root);

    Analysis {
        tree: parser.tree,
        outcome,
    }
}

impl<'l, 'v> SyntaxAnalyzer<'l, 'v> {
    pub fn new(lexer: &'l mut Lexer<'v>) -> Self {
        Self {
            lexer,
            tree: DerivationTree::new(),
        }
    }

    fn lookahead(&self) -> TokenCategory {
        self.lexer.current_category()
    }

    // <S> ::= <NP> <V> <NP> ( <PNP> | <CON> <S> )? <EOS>
    fn sentence(&mut self, from: NodeId) -> Result<(), SyntaxError> {
        let node = self.tree.expand(from, Symbol::Sentence);

        self.noun_phrase(node)?;
        self.terminal(node, Symbol::Verb)?;
        self.noun_phrase(node)?;

        // Preposition is checked first; a conjunction after a PNP is left for <EOS>.
        match self.lookahead() {
            TokenCategory::Preposition => self.prepositional_noun_phrase(node)?,
            TokenCategory::Conjunction => {
                self.terminal(node, Symbol::Conjunction)?;
                self.sentence(node)?;
            }
            _ => {}
        }

        self.terminal(node, Symbol::EndOfSentence)
    }

    // <NP> ::= <A> <AN> <ADVERB>?
    fn noun_phrase(&mut self, from: NodeId) -> Result<(), SyntaxError> {
        let node = self.tree.expand(from, Symbol::NounPhrase);

        self.terminal(node, Symbol::Article)?;
        self.adj_noun(node)?;

        if self.lookahead() == TokenCategory::Adverb {
            self.terminal(node, Symbol::Adverb)?;
        }
        Ok(())
    }

    // <PNP> ::= <PREP> <NP>
    fn prepositional_noun_phrase(&mut self, from: NodeId) -> Result<(), SyntaxError> {
        let node = self.tree.expand(from, Symbol::PrepositionalNounPhrase);

        self.terminal(node, Symbol::Preposition)?;
        self.noun_phrase(node)
    }

    // <AN> ::= <ADJ_TAIL>? <N>
    fn adj_noun(&mut self, from: NodeId) -> Result<(), SyntaxError> {
        let node = self.tree.expand(from, Symbol::AdjNoun);

        if self.lookahead() == TokenCategory::Adjective {
            self.adjective_tail(node)?;
        }
        self.terminal(node, Symbol::Noun)
    }

    // <ADJ_TAIL> ::= <ADJ> ( ',' <ADJ_TAIL> )?
    //
    // Tail-recursive in the grammar, so it is unrolled: each nested <ADJ_TAIL>
    // hangs off the previous one and stack depth stays flat for long chains.
    fn adjective_tail(&mut self, from: NodeId) -> Result<(), SyntaxError> {
        let mut parent = from;
        loop {
            let node = self.tree.expand(parent, Symbol::AdjectiveTail);
            self.terminal(node, Symbol::Adjective)?;

            if self.lookahead() != TokenCategory::AdjectiveDivider {
                return Ok(());
            }
            self.lexer.advance(); // the divider has no node of its own
            parent = node;
        }
    }

    /// Match one terminal symbol against the current token and consume it.
    /// `<EOS>` only matches; it never advances.
    fn terminal(&mut self, from: NodeId, symbol: Symbol) -> Result<(), SyntaxError> {
        let Some(expected) = symbol.terminal_category() else {
            unreachable!("{symbol} is not a terminal");
        };

        let node = self.tree.expand(from, symbol);
        if symbol != Symbol::EndOfSentence {
            self.tree.attach_lexeme(node, self.lexer.current_lexeme());
        }

        if self.lexer.current_category() != expected {
            return Err(self.raise(expected, from));
        }

        // The sentinel stays current so every enclosing <S> can match it too
        if symbol != Symbol::EndOfSentence {
            self.lexer.advance();
        }
        Ok(())
    }

    // Handle all of the errors in one place
    fn raise(&mut self, expected: TokenCategory, at: NodeId) -> SyntaxError {
        let err = SyntaxError {
            expected,
            found: self.lexer.current_lexeme().to_string(),
            at,
            span: self.lexer.current_span(),
        };
        debug!(%expected, found = %err.found, node = %at, "rule rejected token");

        self.tree.reject(at, &err);
        err
    }
}
