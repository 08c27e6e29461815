//! Command line argument parsing for verbatim.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use verbatim_literals::LiteralKind;

/// verbatim - find and print JavaScript-style literals
#[derive(Parser, Debug)]
#[command(name = "verbatim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a number literal
    #[command(alias = "num")]
    Number(ScanArgs),

    /// Scan a string literal
    #[command(alias = "str")]
    String(ScanArgs),

    /// Scan a keyword or constant
    #[command(alias = "kw")]
    Keyword(ScanArgs),

    /// Scan a regular expression literal
    #[command(alias = "regex", alias = "re")]
    Regexp(ScanArgs),

    /// Scan a comment
    Comment(ScanArgs),

    /// Scan a literal of any kind
    Detect(DetectArgs),

    /// Print a value as a literal
    Literal(LiteralArgs),

    /// Scan every line of a file
    Batch(BatchArgs),
}

impl Commands {
    /// The literal kind a scan subcommand is restricted to.
    pub fn scan_kind(&self) -> Option<(LiteralKind, &ScanArgs)> {
        match self {
            Commands::Number(args) => Some((LiteralKind::Number, args)),
            Commands::String(args) => Some((LiteralKind::String, args)),
            Commands::Keyword(args) => Some((LiteralKind::Keyword, args)),
            Commands::Regexp(args) => Some((LiteralKind::RegExp, args)),
            Commands::Comment(args) => Some((LiteralKind::Comment, args)),
            _ => None,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Text starting with the literal
    pub input: String,

    /// Fail with an error instead of printing nothing
    #[arg(long)]
    pub strict: bool,

    /// Accept the longest valid prefix (numbers only)
    #[arg(long)]
    pub allow_trailing: bool,

    /// Remove comment markers from the value (comments only)
    #[arg(long)]
    pub strip: bool,

    /// Print the token as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Default)]
pub struct DetectArgs {
    /// Text starting with the literal
    pub input: String,

    /// Print the token as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct LiteralArgs {
    /// Literal kind to produce
    pub kind: LiteralKind,

    /// The value: a number, raw text, keyword, pattern or comment text
    pub value: String,

    /// Radix for numbers (2, 8, 10 or 16)
    #[arg(long, default_value_t = 10)]
    pub radix: u32,

    /// Quote for strings
    #[arg(long, default_value_t = '"')]
    pub quote: char,

    /// Comment type: //, /* or /**
    #[arg(long = "type", default_value = "//")]
    pub comment_type: String,

    /// Indentation written before continuation lines of comments
    #[arg(long, default_value = "")]
    pub indent: String,

    /// Flags for regular expressions
    #[arg(long, default_value = "")]
    pub flags: String,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one candidate literal per line
    pub file: PathBuf,

    /// Print the results as a JSON array
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan_command() {
        let cli =
            Cli::try_parse_from(["verbatim", "number", "0x1F", "--strict", "--json"]).unwrap();
        let (kind, args) = cli.command.as_ref().and_then(Commands::scan_kind).unwrap();
        assert_eq!(kind, LiteralKind::Number);
        assert_eq!(args.input, "0x1F");
        assert!(args.strict);
        assert!(args.json);
        assert!(!args.allow_trailing);
    }

    #[test]
    fn test_parse_literal_command() {
        let cli = Cli::try_parse_from([
            "verbatim", "literal", "comment", "a\nb", "--type", "/*", "--indent", "  ",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Literal(args)) => {
                assert_eq!(args.kind, LiteralKind::Comment);
                assert_eq!(args.comment_type, "/*");
                assert_eq!(args.indent, "  ");
                assert_eq!(args.radix, 10);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_command_starts_repl() {
        let cli = Cli::try_parse_from(["verbatim", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }
}
