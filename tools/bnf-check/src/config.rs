use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bnf_protocol::Vocabulary;
use clap::ValueEnum;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz tree description followed by the verdict
    #[default]
    Dot,
    /// One JSON report per sentence
    Json,
}

/// Parse and validate a JSON vocabulary document.
pub fn parse_vocabulary(json: &str) -> Result<Vocabulary> {
    let vocab: Vocabulary = serde_json::from_str(json).context("malformed vocabulary")?;
    vocab.validate()?;

    for overlap in vocab.overlaps() {
        warn!(
            word = %overlap.word,
            kept = %overlap.kept,
            shadowed = %overlap.shadowed,
            "word listed under two categories, first listed wins"
        );
    }
    Ok(vocab)
}

/// The vocabulary at `path`, or the built-in one.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary> {
    let Some(path) = path else {
        return Ok(Vocabulary::standard());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read vocabulary {}", path.display()))?;
    parse_vocabulary(&json).with_context(|| format!("in vocabulary {}", path.display()))
}
