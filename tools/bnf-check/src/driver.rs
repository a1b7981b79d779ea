use std::borrow::Cow;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use bnf_parser::render::{to_dot, SentenceReport};
use bnf_parser::{analyze, with_sentinel, Analysis, Lexer};
use bnf_protocol::{SentenceId, Vocabulary};
use tracing::{debug, info, info_span, warn};

use crate::config::OutputFormat;

pub const USAGE: &str = "Compilers need to be told what to compile!!!";
pub const VIEWER_HINT: &str = "Copy/Paste the above output into: http://www.webgraphviz.com/";
pub const SEPARATOR: &str = "-----------------------------------------------------------";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
    pub comments: usize,
}

/// Checks one sentence per line of an input source.
///
/// The lexer is reused across lines and restarted for each one; every
/// sentence gets its own derivation tree.
pub struct Driver<'v> {
    lexer: Lexer<'v>,
    format: OutputFormat,
    hint: bool,
    last_id: SentenceId,
}

impl<'v> Driver<'v> {
    pub fn new(vocab: &'v Vocabulary, format: OutputFormat) -> Self {
        Self {
            lexer: Lexer::new(vocab),
            format,
            hint: true,
            last_id: SentenceId::default(),
        }
    }

    /// Toggle the viewer hint printed after each tree.
    pub fn with_hint(mut self, hint: bool) -> Self {
        self.hint = hint;
        self
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("cannot read line {}", line_no + 1))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            // Undecodable bytes become U+FFFD and only affect their own line
            let decoded = String::from_utf8_lossy(&buf);
            if matches!(decoded, Cow::Owned(_)) {
                warn!(line = line_no, "line is not valid UTF-8, decoded lossily");
            }
            let line = decoded.trim();

            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('#') {
                summary.comments += 1;
                if self.format == OutputFormat::Dot {
                    writeln!(out, "Comment: {comment}")?;
                }
                continue;
            }

            self.last_id = self.last_id.next();
            let id = self.last_id;
            let _span = info_span!("sentence", %id, line = line_no).entered();

            self.lexer.start(&with_sentinel(line));
            let analysis = analyze(&mut self.lexer);
            debug!(accepted = analysis.is_accepted(), rules = analysis.tree.rule_count(), "parsed");

            if analysis.is_accepted() {
                summary.accepted += 1;
            } else {
                summary.rejected += 1;
            }

            match self.format {
                OutputFormat::Dot => self.write_dot(out, line, &analysis)?,
                OutputFormat::Json => {
                    let report = SentenceReport::new(id, line, &analysis);
                    writeln!(out, "{}", report.to_json()?)?;
                }
            }
        }

        info!(
            accepted = summary.accepted,
            rejected = summary.rejected,
            comments = summary.comments,
            "finished"
        );
        Ok(summary)
    }

    fn write_dot<W: Write>(&self, out: &mut W, line: &str, analysis: &Analysis) -> Result<()> {
        write!(out, "{}", to_dot(&analysis.tree))?;

        if self.hint {
            writeln!(out, "\n{VIEWER_HINT}\n")?;
        }

        match &analysis.outcome {
            Ok(()) => writeln!(out, "The sentence '{line}' follows the BNF grammar.")?,
            Err(err) => {
                writeln!(out, "SYNTAX ERROR: {err}")?;
                writeln!(out, "FAIL: The sentence '{line}' does not follow the BNF grammar.")?;
            }
        }

        writeln!(out, "{SEPARATOR}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, format: OutputFormat) -> (Summary, String) {
        let vocab = Vocabulary::standard();
        let mut driver = Driver::new(&vocab, format).with_hint(false);
        let mut out = Vec::new();

        let summary = driver.run(Cursor::new(input), &mut out).expect("run");
        (summary, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn test_verdicts_and_separators() {
        let (summary, out) = run("the dog bit the rat.\ndog bit the rat\n", OutputFormat::Dot);

        assert_eq!(summary, Summary { accepted: 1, rejected: 1, comments: 0 });
        assert!(out.contains("The sentence 'the dog bit the rat.' follows the BNF grammar.\n"));
        assert!(out.contains("SYNTAX ERROR: ARTICLE was expected but 'dog' was found.\n"));
        assert!(out.contains("FAIL: The sentence 'dog bit the rat' does not follow the BNF grammar.\n"));
        assert_eq!(out.matches(SEPARATOR).count(), 2);
        assert_eq!(out.matches("digraph ParseTree {").count(), 2);
    }

    #[test]
    fn test_blank_and_comment_lines_get_no_verdict() {
        let (summary, out) = run("\n   \n# a comment\n\t#another\n", OutputFormat::Dot);

        assert_eq!(summary, Summary { accepted: 0, rejected: 0, comments: 2 });
        assert_eq!(out, "Comment:  a comment\nComment: another\n");
    }

    #[test]
    fn test_failure_does_not_affect_next_line() {
        let (_, out) = run("the the the\nthe dog bit the rat\n", OutputFormat::Dot);

        let second = out.split(SEPARATOR).nth(1).expect("second sentence");
        assert!(second.contains("The sentence 'the dog bit the rat' follows the BNF grammar."));
        // Node numbering restarts for each sentence
        assert!(second.contains("\t\"0\" -> {\"1\" [label=\"<S>\", shape=oval]};"));
    }

    #[test]
    fn test_invalid_utf8_line_is_isolated() {
        let vocab = Vocabulary::standard();
        let mut driver = Driver::new(&vocab, OutputFormat::Dot).with_hint(false);
        let mut out = Vec::new();

        let input: &[u8] = b"the dog bit the rat\nthe \xff dog\nthe cat saw the rat\n";
        let summary = driver.run(input, &mut out).expect("run");
        assert_eq!(summary, Summary { accepted: 2, rejected: 1, comments: 0 });

        let out = String::from_utf8(out).expect("utf8");
        assert!(out.contains("SYNTAX ERROR: NOUN was expected but '\u{fffd}' was found."));
        assert!(out.contains("The sentence 'the cat saw the rat' follows the BNF grammar."));
    }

    #[test]
    fn test_hint_follows_tree() {
        let vocab = Vocabulary::standard();
        let mut driver = Driver::new(&vocab, OutputFormat::Dot);
        let mut out = Vec::new();
        driver
            .run(Cursor::new("the dog bit the rat"), &mut out)
            .expect("run");

        let out = String::from_utf8(out).expect("utf8");
        assert!(out.contains("}\n\nCopy/Paste the above output into: http://www.webgraphviz.com/\n\nThe sentence"));
    }

    #[test]
    fn test_json_format() {
        let (summary, out) = run(
            "# skipped\nthe dog bit the rat\nthe dog bit\n",
            OutputFormat::Json,
        );
        assert_eq!(summary.comments, 1);

        let reports: Vec<serde_json::Value> = out
            .lines()
            .map(|l| serde_json::from_str(l).expect("json line"))
            .collect();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["id"], 1);
        assert_eq!(reports[0]["accepted"], true);
        assert_eq!(reports[1]["id"], 2);
        assert_eq!(reports[1]["sentence"], "the dog bit");
        assert_eq!(reports[1]["error"]["expected"], "ARTICLE");
        assert_eq!(reports[1]["error"]["node"], 7);
    }
}
