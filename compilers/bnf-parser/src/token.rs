use serde::Serialize;

/// Byte range of a token within the started line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span, used once the line is exhausted.
    pub fn empty_at(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }
}
