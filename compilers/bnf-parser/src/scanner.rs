use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    IResult,
};

use bnf_protocol::{ADJECTIVE_DIVIDER, EOS_MARKER};

use crate::token::Span;

/// Characters that always form a token of their own, even when glued to a word.
fn is_punctuation(c: char) -> bool {
    ADJECTIVE_DIVIDER.starts_with(c) || EOS_MARKER.starts_with(c)
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !is_punctuation(c)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn raw_word(input: &str) -> IResult<&str, &str> {
    alt((
        tag(ADJECTIVE_DIVIDER),
        tag(EOS_MARKER),
        take_while1(is_word_char),
    ))(input)
}

/// Scan the next raw word of `line`, starting at byte `offset`.
///
/// Returns the word with its span in the original line and the offset just
/// past it, or `None` when only whitespace is left.
pub fn next_word(line: &str, offset: usize) -> Option<(Span, &str, usize)> {
    let input = &line[offset..];

    let (rest, _) = whitespace(input).ok()?;
    if rest.is_empty() {
        return None;
    }

    let (after, word) = raw_word(rest).ok()?;

    let start = offset + (input.len() - rest.len());
    let end = start + word.len();
    debug_assert_eq!(end, offset + (input.len() - after.len()));

    Some((Span::new(start, end), word, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_with_spans(line: &str) -> Vec<(Span, &str)> {
        let mut result = Vec::new();
        let mut offset = 0;

        while let Some((span, word, next)) = next_word(line, offset) {
            result.push((span, word));
            offset = next;
        }

        result
    }

    fn words(line: &str) -> Vec<&str> {
        scan_with_spans(line).into_iter().map(|(_, w)| w).collect()
    }

    #[test]
    fn test_splits_on_whitespace() {
        assert_eq!(words("the dog  bit\tthe rat"), vec!["the", "dog", "bit", "the", "rat"]);
    }

    #[test]
    fn test_punctuation_is_split_from_words() {
        assert_eq!(
            words("the big, red dog bit the rat."),
            vec!["the", "big", ",", "red", "dog", "bit", "the", "rat", "."]
        );
        assert_eq!(words(",,"), vec![",", ","]);
    }

    #[test]
    fn test_spans_point_into_line() {
        let line = "  the cat,";
        let scanned = scan_with_spans(line);

        assert_eq!(scanned[0].0, Span::new(2, 5));
        assert_eq!(scanned[1].0, Span::new(6, 9));
        assert_eq!(scanned[2].0, Span::new(9, 10));
        for (span, word) in scanned {
            assert_eq!(&line[span.start..span.end], word);
        }
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(words("").is_empty());
        assert!(words("   \t ").is_empty());
        assert_eq!(next_word("the", 3), None);
    }

    #[test]
    fn test_non_ascii_words_stay_whole() {
        assert_eq!(words("the café, $$"), vec!["the", "café", ",", "$$"]);
        assert_eq!(words("the\u{a0}dog"), vec!["the", "dog"]);
    }
}
