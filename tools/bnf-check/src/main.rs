mod config;
mod driver;
mod logs;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::config::{load_vocabulary, OutputFormat};
use crate::driver::{Driver, USAGE};

#[derive(Parser)]
#[command(author, version, about = "Checks each line of a file against the toy-English BNF grammar")]
struct Cli {
    /// File with one sentence per line; `#` lines are comments
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// JSON vocabulary to use instead of the built-in word lists
    #[arg(long, value_name = "FILE")]
    vocab: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Do not print the viewer hint after each tree
    #[arg(long)]
    no_hint: bool,
}

fn main() -> anyhow::Result<()> {
    logs::init_tracing();
    let cli = Cli::parse();

    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}

fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let Some(input) = cli.input else {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    };

    let vocab = load_vocabulary(cli.vocab.as_deref())?;
    let file = File::open(&input).with_context(|| format!("cannot open {}", input.display()))?;

    Driver::new(&vocab, cli.format)
        .with_hint(!cli.no_hint)
        .run(BufReader::new(file), out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_prints_usage() {
        let cli = Cli::parse_from(["bnf-check"]);
        let mut out = Vec::new();

        run(cli, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{USAGE}\n"));
    }

    #[test]
    fn test_unopenable_input_is_an_error() {
        let cli = Cli::parse_from(["bnf-check", "does/not/exist.txt"]);
        let mut out = Vec::new();

        let err = run(cli, &mut out).unwrap_err();
        assert!(err.to_string().starts_with("cannot open"));
        assert!(out.is_empty());
    }
}
