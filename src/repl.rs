// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL that scans each entered line for a literal.

use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;
use verbatim_literals::{
    comment, parse_any, string, AnyToken, KeywordValue, LiteralError, LiteralKind, NumberOptions,
    ParseOptions, Spanned,
};

use crate::{commands, report};

/// REPL configuration constants
const HISTORY_FILE: &str = ".verbatim_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Kind,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "kind" | "k" => Some((ReplCommand::Kind, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".kind <kind|any>", "Only scan for one literal kind"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
#[derive(Default)]
struct LiteralHelper {
    /// Commands, kind names and keywords for completion
    words: Vec<String>,
}

impl LiteralHelper {
    fn new() -> Self {
        let commands = [".help", ".exit", ".clear", ".version", ".kind"];
        let kinds = LiteralKind::ALL.map(LiteralKind::as_str);
        let keywords = KeywordValue::ALL.map(KeywordValue::as_str);

        let words = commands
            .into_iter()
            .chain(kinds)
            .chain(["any"])
            .chain(keywords)
            .map(String::from)
            .collect();

        Self { words }
    }
}

/// Byte offset where the word ending at the end of `line` starts.
fn word_start(line: &str) -> usize {
    line.char_indices()
        .rev()
        .find(|(_, c)| !c.is_alphanumeric() && *c != '.')
        .map_or(0, |(i, c)| i + c.len_utf8())
}

impl Completer for LiteralHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // Find the start of the current word
        let start = word_start(&line[..pos]);

        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|candidate| candidate.starts_with(word))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for LiteralHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let start = word_start(line);

        let word = &line[start..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|candidate| candidate.starts_with(word) && candidate.len() > word.len())
            .map(|candidate| candidate[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for LiteralHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }

        // Color the literal at the head of the line, leave the rest alone
        match parse_any(line) {
            Some(token) => {
                let span = token.span();
                Cow::Owned(format!(
                    "{}{}{}",
                    &line[..span.start],
                    report::paint(token.kind(), &line[span.start..span.end]),
                    &line[span.end..]
                ))
            }
            None => Cow::Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for LiteralHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_open_multiline(ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

/// True while the input is a block comment, back-quoted string or escaped
/// line break that has not been closed yet.
fn is_open_multiline(input: &str) -> bool {
    if input.trim_end().ends_with('\\') {
        return true;
    }

    let head = input.trim_start();
    let strict = ParseOptions::strict();
    let scanned = if head.starts_with("/*") {
        comment::parse_token_with(input, strict).map(|_| ())
    } else if head.starts_with('`') {
        string::parse_token_with(input, strict).map(|_| ())
    } else {
        return false;
    };

    matches!(scanned, Err(LiteralError::Unterminated { .. }))
}

impl Helper for LiteralHelper {}

/// The interactive literal scanner
pub struct Repl {
    editor: Editor<LiteralHelper, DefaultHistory>,
    history_path: PathBuf,
    /// Kind every line is scanned as; `None` runs the dispatcher
    kind: Option<LiteralKind>,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new() -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(LiteralHelper::new()));

        // Determine history file path
        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("verbatim")
            .join(HISTORY_FILE);

        // Create parent directory if it doesn't exist
        if let Some(parent) = history_path.parent() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                tracing::debug!(%error, path = %parent.display(), "history directory unavailable");
            }
        }

        if let Err(error) = editor.load_history(&history_path) {
            tracing::debug!(%error, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            kind: None,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            let prompt = self.format_prompt();

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    // Check for REPL commands
                    if let Some((cmd, arg)) = ReplCommand::parse(&line) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    self.scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        if let Err(error) = self.editor.save_history(&self.history_path) {
            tracing::warn!(%error, "failed to save history");
        }

        println!();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "verbatim".bright_cyan().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {}",
            "Enter text starting with a literal to scan it".dimmed()
        );
        println!();
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn format_prompt(&self) -> String {
        let label = match self.kind {
            Some(kind) => format!("verbatim[{kind}]>"),
            None => "verbatim>".to_string(),
        };
        format!("{} ", label.bright_green().bold())
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => {
                println!(
                    "{}: {}",
                    "verbatim".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
            }
            ReplCommand::Kind => match arg {
                None => {
                    let current = self.kind.map_or("any", LiteralKind::as_str);
                    println!("{} {}", "scanning for".dimmed(), current.cyan());
                }
                Some("any") => self.kind = None,
                Some(name) => match name.parse::<LiteralKind>() {
                    Ok(kind) => self.kind = Some(kind),
                    Err(message) => eprintln!("{}: {}", "Error".red().bold(), message),
                },
            },
        }
        CommandResult::Continue
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:18} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Kinds:".white().bold());
        println!();
        for kind in LiteralKind::ALL {
            println!("  {}", report::paint(kind, kind.as_str()));
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!(
            "  {:18} {}",
            "Ctrl+C".yellow(),
            "Cancel current input".dimmed()
        );
        println!("  {:18} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:18} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!("  {:18} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
    }

    fn scan_and_print(&self, input: &str) {
        match scan_line(self.kind, input) {
            Ok(Some(token)) => println!("{}", report::describe(&token, false)),
            Ok(None) => println!("{}", "no literal found".dimmed()),
            Err(error) => print_error(&error),
        }
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

/// Scans `input` as `kind`, or as whatever it is when no kind is set.
fn scan_line(kind: Option<LiteralKind>, input: &str) -> Result<Option<AnyToken>, LiteralError> {
    match kind {
        Some(kind) => commands::scan_as(kind, input, NumberOptions::strict()),
        None => Ok(parse_any(input)),
    }
}

/// Print a formatted error message
fn print_error(error: &LiteralError) {
    eprintln!("{}: {}", error.kind().as_str().red().bold(), error);
}
