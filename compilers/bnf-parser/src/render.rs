//! Output forms of a derivation tree.
//!
//! `to_dot` writes the Graphviz description that a web viewer can draw
//! directly. `SentenceReport` is the serializable form used for JSON output.

use std::fmt::Write as _;

use bnf_protocol::SentenceId;
use serde::Serialize;

use crate::error::SyntaxError;
use crate::syntax::Analysis;
use crate::tree::{DerivationEdge, DerivationTree, EdgeTarget};

pub const GRAPH_NAME: &str = "ParseTree";
pub const ROOT_LABEL: &str = "PARSE TREE";

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn edge_line(edge: &DerivationEdge) -> String {
    let parent = edge.parent;
    let label = escape(&edge.label);
    match edge.child {
        EdgeTarget::Rule(id) => {
            format!("\t\"{parent}\" -> {{\"{id}\" [label=\"{label}\", shape=oval]}};")
        }
        EdgeTarget::Lexeme(id) => {
            format!("\t\"{parent}\" -> {{\"{id}_term\" [label=\"{label}\", shape=rect]}};")
        }
        EdgeTarget::Rejection => format!("\t\"{parent}\" -> {{\"{label}\"}};"),
    }
}

/// Render the tree as a complete `digraph`, closed even when rejected.
pub fn to_dot(tree: &DerivationTree) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "digraph {GRAPH_NAME} {{");
    let _ = writeln!(
        out,
        "\t{{\"{}\" [label=\"{ROOT_LABEL}\" shape=diamond]}};",
        tree.root()
    );
    for edge in tree.edges() {
        let _ = writeln!(out, "{}", edge_line(&edge));
    }
    out.push_str("}\n");

    out
}

#[derive(Debug, Clone, Serialize)]
pub struct SentenceReport {
    pub id: SentenceId,
    pub sentence: String,
    pub accepted: bool,
    pub error: Option<SyntaxError>,
    pub edges: Vec<DerivationEdge>,
}

impl SentenceReport {
    pub fn new(id: SentenceId, sentence: &str, analysis: &Analysis) -> Self {
        Self {
            id,
            sentence: sentence.to_string(),
            accepted: analysis.is_accepted(),
            error: analysis.error().cloned(),
            edges: analysis.tree.edges().collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
