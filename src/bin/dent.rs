//! Command-line interface for dent
//! This binary scans a file and reports the structural tokens (Newline,
//! Indent, Dedent) its indentation layout produces.
//!
//! Usage:
//!   dent scan `<path>` [--indent-only]  - Print the structural token stream as JSON
//!   dent state `<path>`                 - Print the final serialized stack checkpoint

use clap::{Arg, ArgAction, Command};
use serde::Serialize;

use dent::{
    scan_document_with, Cursor, Scanner, ScannerConfig, StrCursor, TokenKind, ValidSymbols,
    SERIALIZE_BUFFER_SIZE,
};

#[derive(Serialize)]
struct TokenRecord {
    kind: TokenKind,
    start: usize,
    end: usize,
}

fn main() {
    let matches = Command::new("dent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting the indentation structure of files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("scan")
                .about("Print the structural token stream as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to scan")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("indent-only")
                        .long("indent-only")
                        .help("Leave newlines to the grammar; report only Indent/Dedent")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("state")
                .about("Print the serialized stack checkpoint after scanning the whole file")
                .arg(
                    Arg::new("path")
                        .help("Path to the file to scan")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("scan", scan_matches)) => {
            let path = scan_matches.get_one::<String>("path").unwrap();
            let indent_only = scan_matches.get_flag("indent-only");
            handle_scan_command(path, indent_only);
        }
        Some(("state", state_matches)) => {
            let path = state_matches.get_one::<String>("path").unwrap();
            handle_state_command(path);
        }
        _ => unreachable!(),
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the scan command
fn handle_scan_command(path: &str, indent_only: bool) {
    let source = read_source(path);
    let valid = if indent_only {
        ValidSymbols::indentation()
    } else {
        ValidSymbols::all()
    };

    let tokens: Vec<TokenRecord> = scan_document_with(ScannerConfig::default(), valid, &source)
        .into_iter()
        .map(|(kind, range)| TokenRecord {
            kind,
            start: range.start,
            end: range.end,
        })
        .collect();

    let output = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
        eprintln!("Serialization error: {}", e);
        std::process::exit(1);
    });

    println!("{}", output);
}

/// Handle the state command
///
/// Scans the file without draining the end-of-input dedents, then prints
/// the checkpoint bytes the host would persist at that point.
fn handle_state_command(path: &str) {
    let source = read_source(path);
    let mut scanner = Scanner::new();
    let mut cursor = StrCursor::new(&source);

    // Stop before end of input so the checkpoint still shows the levels
    // left open, instead of the drained stack.
    while !cursor.is_at_end() {
        let start = cursor.checkpoint();
        match scanner.scan(&mut cursor, ValidSymbols::indentation()) {
            Some(_) => {
                let mark = cursor.mark();
                cursor.restore(mark);
            }
            None => {
                cursor.restore(start);
                cursor.advance();
            }
        }
    }

    let mut buffer = [0u8; SERIALIZE_BUFFER_SIZE];
    let written = scanner.serialize(&mut buffer);
    println!("{:?}", &buffer[..written]);
}
