// fredlex - A lexer for the FRED Modeling Language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! fredlex CLI
//!
//! Dumps the token stream of FRED model files, or checks them for input the
//! lexer does not recognize.

use std::io::{IsTerminal, Read};
use std::ops::Range;
use std::path::PathBuf;
use std::process::ExitCode;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fredlex::fred::FredLexer;
use fredlex::{LexError, SourceLocation, TokenKind};

/// fredlex - A lexer for the FRED Modeling Language
#[derive(Parser, Debug)]
#[command(name = "fredlex")]
#[command(version)]
#[command(about = "Tokenize FRED Modeling Language files")]
#[command(long_about = r#"
fredlex splits FRED model files into tokens and prints one token per line:
byte offset, line:column, token kind and the quoted token text.

Example usage:
  fredlex model.fred
  fredlex --skip-whitespace params.fred
  cat model.fred | fredlex -
  fredlex --check model.fred base.fredmod
  fredlex --state string quoted.txt
"#)]
struct Cli {
    /// Source files to tokenize (`-` reads stdin)
    files: Vec<PathBuf>,

    /// Start tokenizing in this state instead of the initial one
    #[arg(long, value_name = "NAME")]
    state: Option<String>,

    /// Report unrecognized input instead of dumping tokens
    #[arg(long)]
    check: bool,

    /// Print the lexer descriptor and its states
    #[arg(long)]
    info: bool,

    /// Leave whitespace tokens out of the dump
    #[arg(long)]
    skip_whitespace: bool,

    /// Increase log output (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// One source read into memory.
struct Input {
    name: String,
    source: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let lexer = match fredlex::fred::lexer() {
        Ok(lexer) => lexer,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    if cli.info {
        print_info(lexer);
        return ExitCode::SUCCESS;
    }

    let inputs = match read_inputs(&cli.files) {
        Ok(inputs) => inputs,
        Err((name, e)) => {
            eprintln!("Error: Cannot read {}: {}", name, e);
            return ExitCode::from(3);
        }
    };

    let state = cli
        .state
        .as_deref()
        .unwrap_or_else(|| lexer.table().initial_state());
    let color = std::io::stderr().is_terminal();
    let show_headers = inputs.len() > 1 && !cli.check;

    let mut unrecognized = 0;
    for (index, input) in inputs.iter().enumerate() {
        if show_headers {
            if index > 0 {
                println!();
            }
            println!("==> {} <==", input.name);
        }

        let result = if cli.check {
            check(lexer, input, state, color)
        } else {
            dump(lexer, input, state, cli.skip_whitespace)
        };
        match result {
            Ok(count) => unrecognized += count,
            Err(e) => {
                report_fatal(&e, input, color);
                return ExitCode::from(1);
            }
        }
    }

    if cli.check && unrecognized > 0 {
        eprintln!(
            "Found {} unrecognized character(s) in {} file(s)",
            unrecognized,
            inputs.len()
        );
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Set up logging on stderr. `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Read every input; no files or `-` means stdin.
fn read_inputs(files: &[PathBuf]) -> Result<Vec<Input>, (String, std::io::Error)> {
    if files.is_empty() {
        return read_stdin().map(|input| vec![input]);
    }

    let mut inputs = Vec::with_capacity(files.len());
    for path in files {
        if path.as_os_str() == "-" {
            inputs.push(read_stdin()?);
            continue;
        }
        let name = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(source) => {
                debug!(file = %name, bytes = source.len(), "read input");
                inputs.push(Input { name, source });
            }
            Err(e) => return Err((name, e)),
        }
    }
    Ok(inputs)
}

fn read_stdin() -> Result<Input, (String, std::io::Error)> {
    let name = "<stdin>".to_string();
    let mut source = String::new();
    match std::io::stdin().read_to_string(&mut source) {
        Ok(_) => Ok(Input { name, source }),
        Err(e) => Err((name, e)),
    }
}

/// Print one line per token. Returns the number of `Error` tokens.
fn dump(
    lexer: &FredLexer,
    input: &Input,
    state: &str,
    skip_whitespace: bool,
) -> fredlex::Result<usize> {
    let mut location = SourceLocation::default();
    let mut unrecognized = 0;

    for token in lexer.tokens_from(&input.source, state)? {
        let token = token?;
        if token.kind == TokenKind::Error {
            unrecognized += 1;
        }
        if !(skip_whitespace && token.kind == TokenKind::Whitespace) {
            println!(
                "{:>6}  {:<9} {:<15} {:?}",
                token.position,
                location.to_string(),
                token.kind.name(),
                token.text
            );
        }
        location.advance(token.text);
    }

    info!(file = %input.name, unrecognized, "dumped tokens");
    Ok(unrecognized)
}

/// Report every `Error` token. Returns how many were found.
fn check(lexer: &FredLexer, input: &Input, state: &str, color: bool) -> fredlex::Result<usize> {
    let mut unrecognized = 0;

    for token in lexer.tokens_from(&input.source, state)? {
        let token = token?;
        if token.kind == TokenKind::Error {
            unrecognized += 1;
            let mut error = LexError::no_rule_matched(&token);
            if is_unterminated_comment(&input.source, token.position) {
                error = error.with_hint("A comment on the last line needs a trailing newline");
            }
            report(&error, input, color);
        }
    }

    if unrecognized == 0 {
        println!("{}: ok", input.name);
    }
    Ok(unrecognized)
}

/// `#` starting the last line when the source has no final newline.
fn is_unterminated_comment(source: &str, offset: usize) -> bool {
    let rest = &source[offset..];
    rest.starts_with('#') && !rest.contains('\n')
}

fn report_fatal(error: &LexError, input: &Input, color: bool) {
    if error.span.is_some() {
        report(error, input, color);
    } else {
        eprintln!("Error: {}", error);
    }
}

/// Render `error` against the source with ariadne.
fn report(error: &LexError, input: &Input, color: bool) {
    let id = input.name.as_str();
    let range = error.span.map(Range::from).unwrap_or(0..0);

    let mut builder = Report::build(ReportKind::Error, id, range.start)
        .with_config(Config::default().with_color(color))
        .with_code(error.code_str())
        .with_message(&error.message)
        .with_label(
            Label::new((id, range))
                .with_message(error.code.to_string())
                .with_color(Color::Red),
        );
    if let Some(hint) = &error.hint {
        builder = builder.with_help(hint);
    }

    if let Err(e) = builder
        .finish()
        .eprint((id, Source::from(input.source.as_str())))
    {
        eprintln!("Error: {}", error);
        debug!(error = %e, "could not render diagnostic");
    }
}

fn print_info(lexer: &FredLexer) {
    let info = lexer.info();
    println!("Name:       {}", info.name);
    println!("Aliases:    {}", info.aliases.join(", "));
    println!("Filenames:  {}", info.filenames.join(", "));
    println!("MIME types: {}", info.mime_types.join(", "));
    println!("States:");
    let table = lexer.table();
    for name in table.state_names() {
        let marker = if name == table.initial_state() {
            " (initial)"
        } else {
            ""
        };
        println!(
            "  {:<10} {} rule(s){}",
            name,
            table.rule_count(name).unwrap_or_default(),
            marker
        );
    }
    println!(
        "Vocabulary: {} word(s)",
        lexer.classifier().vocabulary().len()
    );
}
