use std::{fs::read_to_string, path::PathBuf, process::ExitCode};

use addlang::{
    ast::printer::render_tree,
    lexer::lexer::Lexer,
    parser::parser::Parser,
    render_error,
};
use clap::{ArgAction, Parser as ClapParser};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Lexes a snippet, prints its tokens, then parses it into an expression tree.
#[derive(Debug, ClapParser)]
#[command(name = "addlang", about = "Lexer and additive-expression parser")]
struct Cli {
    /// Source text to process
    #[arg(default_value = "if x = 10 + 5 - 3", conflicts_with = "file")]
    source: String,

    /// Read the source from a file instead
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Stop after printing tokens
    #[arg(long)]
    tokens_only: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let (source, file_name) = match &cli.file {
        Some(path) => match read_to_string(path) {
            Ok(contents) => (contents, path.to_string_lossy().into_owned()),
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to read source file");
                return ExitCode::FAILURE;
            }
        },
        None => (cli.source.clone(), String::from("shell")),
    };

    println!("Lexing Tokens:");
    for token in Lexer::new(source.clone(), Some(file_name.clone())) {
        if let Some(illegal) = token.illegal_error() {
            warn!(%illegal, "illegal character in source");
        }
        println!("Token: {}", token.debug());
    }

    if cli.tokens_only {
        return ExitCode::SUCCESS;
    }

    println!();
    println!("Parsing and generating AST:");

    // A fresh lexer: the one above has already been drained.
    let mut lexer = Lexer::new(source.clone(), Some(file_name));
    let mut parser = Parser::new(&mut lexer);

    match parser.parse() {
        Ok(Some(expr)) => {
            print!("{}", render_tree(&expr));
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("(no expression)");
            ExitCode::SUCCESS
        }
        Err(e) => {
            print!("{}", render_error(&e, &source));
            ExitCode::FAILURE
        }
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "addlang=warn",
        1 => "addlang=debug",
        _ => "addlang=trace",
    }
}
