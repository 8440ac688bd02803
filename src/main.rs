//! `hornet` loads a Prolog-style source file and prompts for queries.
//!
//! # Usage
//! ```text
//! hornet tests/kings.pl
//! ```
//! The program loads the file, then prompts `?- ` for queries. Each proof
//! is printed as `Name = value,\nName = value.\n`, `true.` if the proof
//! has no free-variable bindings, or `false.` if no proof exists.
// Adapted from suiron-rust's query.rs binary (Cleve Lendon, 2023) for the
// load-then-REPL shape, and from brolog/cli.py for the argument surface
// and the exact proof-printing format.

use std::fs;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use hornet::knowledge_base::KnowledgeBase;
use hornet::parser::{parse_program, parse_query};
use hornet::resolver::query;
use hornet::substitution::variable_assignments;

/// A small Prolog interpreter.
#[derive(ClapParser)]
#[command(name = "hornet", version, about = "Loads a Prolog-style source file and prompts for queries.")]
struct Cli {
    /// Source file to load.
    input_file: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let Some(path) = cli.input_file else {
        println!("\nhornet - a small Prolog interpreter\n");
        println!("Usage:");
        println!("hornet tests/kings.pl\n");
        return ExitCode::SUCCESS;
    };

    println!("Loading file: {}", path);
    let source = match fs::read_to_string(&path) {
        Ok(s) => s,
        Err(err) => {
            println!("{}: {}", path, err);
            return ExitCode::FAILURE;
        }
    };

    let rules = match parse_program(&source) {
        Ok(rules) => rules,
        Err(err) => {
            print_parse_error(&err);
            return ExitCode::FAILURE;
        }
    };
    debug!(count = rules.len(), "loaded clauses");

    let mut kb = KnowledgeBase::new();
    kb.add_rules(rules);

    repl(&kb);
    ExitCode::SUCCESS
}

fn repl(kb: &KnowledgeBase) {
    let mut editor = DefaultEditor::new().expect("failed to start line editor");
    loop {
        match editor.readline("?- ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                run_query(kb, line);
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                warn!(%err, "line editor error");
                break;
            }
        }
    }
}

fn run_query(kb: &KnowledgeBase, line: &str) {
    let q = match parse_query(line) {
        Ok(q) => q,
        Err(err) => {
            warn!(query = line, "query failed to parse");
            print_parse_error(&err);
            return;
        }
    };

    let mut proofs = query(kb, q.clone()).peekable();
    if proofs.peek().is_none() {
        println!("false.");
        return;
    }

    for proof in proofs {
        let assignments = variable_assignments(&q, &proof);
        if assignments.is_empty() {
            println!("true.");
            continue;
        }
        let lines: Vec<String> = assignments.iter().map(|(v, value)| format!("{} = {}", v.name, value)).collect();
        println!("{}.", lines.join(",\n"));
    }
}

fn print_parse_error(err: &hornet::error::Error) {
    match err.token() {
        Some(token) => println!("Error at line {}, column {}: {}", token.line, token.column, err),
        None => println!("Error: {}", err),
    }
}
