//! Document-level driver
//!
//! The scanner itself is a pluggable strategy: one call, one token (or a
//! decline). This module supplies the loop a hosting tokenizer engine runs
//! around it, so that whole sources can be scanned into a structural token
//! stream with byte ranges. The CLI and the integration tests go through
//! this entry point.
//!
//! The protocol per iteration:
//! 1. Checkpoint the cursor.
//! 2. `scan`. On commit, record the token over `checkpoint..mark` and
//!    resume at the committed mark.
//! 3. On decline, restore the checkpoint. The character there belongs to
//!    the grammar proper, which this driver stands in for by stepping over
//!    it; at end of input a decline means the stack is drained and the
//!    scan is complete.
//!
//! Indent and Dedent commit as zero-width tokens at the start of their
//! line, so a resumed cursor re-reads the leading whitespace on the next
//! call. That is what makes closing several levels across successive calls
//! work without any extra bookkeeping.

use std::ops::Range;

use crate::cursor::{Cursor, StrCursor};
use crate::scanner::{Scanner, ScannerConfig};
use crate::tokens::{TokenKind, ValidSymbols};

/// Scan a whole source with the default configuration, all three
/// structural kinds acceptable throughout.
pub fn scan_document(source: &str) -> Vec<(TokenKind, Range<usize>)> {
    scan_document_with(ScannerConfig::default(), ValidSymbols::all(), source)
}

/// Preprocesses source text to ensure it ends with a newline.
///
/// Indentation is only decided at the start of a line, so a file whose last
/// line has no terminator would end mid-line and never drain its open
/// levels. Returns the original string if it already ends with a newline;
/// otherwise, appends one.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

/// Scan a whole source, with the given configuration and acceptability
/// set held fixed across calls.
pub fn scan_document_with(
    config: ScannerConfig,
    valid: ValidSymbols,
    source: &str,
) -> Vec<(TokenKind, Range<usize>)> {
    let source = ensure_source_ends_with_newline(source);
    let mut scanner = Scanner::with_config(config);
    let mut cursor = StrCursor::new(&source);
    let mut tokens = Vec::new();

    loop {
        let start = cursor.checkpoint();
        match scanner.scan(&mut cursor, valid) {
            Some(kind) => {
                tokens.push((kind, cursor.committed_range(start)));
                let mark = cursor.mark();
                cursor.restore(mark);
            }
            None => {
                cursor.restore(start);
                if cursor.is_at_end() {
                    break;
                }
                // Ordinary grammar territory: step over one character and
                // let the scanner look again from there.
                cursor.advance();
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[(TokenKind, Range<usize>)]) -> Vec<TokenKind> {
        tokens.iter().map(|(kind, _)| *kind).collect()
    }

    #[test]
    fn test_flat_document_has_no_indentation_tokens() {
        let tokens =
            scan_document_with(ScannerConfig::default(), ValidSymbols::indentation(), "a\nb\n");
        assert_eq!(tokens, vec![]);
    }

    #[test]
    fn test_single_block() {
        let tokens =
            scan_document_with(ScannerConfig::default(), ValidSymbols::indentation(), "a\n  b\nc\n");
        assert_eq!(kinds(&tokens), vec![TokenKind::Indent, TokenKind::Dedent]);

        // Zero-width tokens anchored at the start of their line.
        assert_eq!(tokens[0].1, 2..2);
        assert_eq!(tokens[1].1, 6..6);
    }

    #[test]
    fn test_newlines_interleave_when_acceptable() {
        let tokens = scan_document("a\n  b\n");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Newline,
                TokenKind::Dedent,
            ]
        );
        // Newline tokens cover their terminator; the closing dedent is
        // zero-width at end of input.
        assert_eq!(tokens[0].1, 1..2);
        assert_eq!(tokens[2].1, 5..6);
        assert_eq!(tokens[3].1, 6..6);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(scan_document(""), vec![]);
    }

    #[test]
    fn test_missing_final_terminator_still_drains() {
        let tokens =
            scan_document_with(ScannerConfig::default(), ValidSymbols::indentation(), "a\n  b");
        assert_eq!(kinds(&tokens), vec![TokenKind::Indent, TokenKind::Dedent]);
    }
}
