use bnf_protocol::{NodeId, TokenCategory};
use serde::Serialize;
use thiserror::Error;

use crate::token::Span;

/// The first mismatch in a sentence. Parsing of that sentence stops here.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{expected} was expected but '{found}' was found.")]
pub struct SyntaxError {
    pub expected: TokenCategory,
    pub found: String,
    /// Rule node that requested the missing terminal.
    #[serde(rename = "node")]
    pub at: NodeId,
    pub span: Span,
}

impl SyntaxError {
    /// Label of the node that closes a rejected tree.
    pub fn tree_label(&self) -> String {
        format!("SYNTAX ERROR: {}", self)
    }
}
