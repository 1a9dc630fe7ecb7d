//! The indentation scanner
//!
//! This module holds the stateful core of the crate: a re-entrant scanner
//! invoked once per scan request by a hosting tokenizer engine. Each call
//! either commits to exactly one structural token (Newline, Indent or
//! Dedent) and advances the cursor, or declines and leaves the cursor at the
//! rollback point recorded on entry. Declining is the expected steady-state
//! outcome on most characters of most lines: it just means "not my token
//! kind, let the grammar's own rules try".
//!
//! The scan, in order:
//! 1. Explicit newline token, when the grammar exposes one. This check
//!    precedes all indentation logic.
//! 2. Column guard: indentation is only decided at the start of a line.
//! 3. Eligibility guard: decline outright when neither Indent nor Dedent is
//!    currently acceptable.
//! 4. Whitespace loop: measure this line's indentation width, skipping
//!    blank lines and comment-only lines, which are neutral.
//! 5. Compare against the top of the indent stack and push (Indent), pop
//!    (Dedent), or decline (same width, or the needed kind not acceptable).
//!
//! Closing several levels at once takes one call per level: the host's
//! token model expects exactly one token per invocation, so the levels
//! still open above the current line's width act as the pending-dedent
//! count. That count lives entirely in the stack, which is why it survives
//! serialize/deserialize checkpointing unchanged.

use serde::{Deserialize, Serialize};

use crate::cursor::Cursor;
use crate::stack::IndentStack;
use crate::tokens::{TokenKind, ValidSymbols};

/// Tuning knobs for the scanner. By default a tab adds a flat 8 columns
/// (not "to the next stop", which matters in mixed tab/space files) and
/// `#` starts a line comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Columns added per tab character. Flat addition, no rounding.
    pub tab_width: u32,
    /// Character that starts a comment running to the end of the line.
    pub comment_marker: char,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            tab_width: 8,
            comment_marker: '#',
        }
    }
}

/// A persistent, re-entrant indentation scanner.
///
/// One scanner owns one [`IndentStack`] and is driven by one cursor from one
/// thread; `&mut self` on [`scan`](Scanner::scan) makes the
/// exclusive-ownership rule a compile-time fact. A host running speculative
/// scans over multiple input versions instantiates one scanner per scan.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScannerConfig,
    stack: IndentStack,
}

impl Scanner {
    /// A scanner with an empty stack and default configuration.
    pub fn new() -> Self {
        Scanner::default()
    }

    pub fn with_config(config: ScannerConfig) -> Self {
        Scanner {
            config,
            stack: IndentStack::new(),
        }
    }

    /// The open indentation widths, bottom to top. Strictly increasing at
    /// every point between calls.
    pub fn levels(&self) -> &[u32] {
        self.stack.levels()
    }

    /// Number of explicitly open levels.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Externalize the stack into `buffer`; returns the bytes written. See
    /// [`IndentStack::serialize`] for the format and its truncation
    /// boundary.
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        self.stack.serialize(buffer)
    }

    /// Replace the stack with a previously serialized checkpoint. An empty
    /// buffer resets to a freshly created scanner.
    pub fn deserialize(&mut self, bytes: &[u8]) {
        self.stack.deserialize(bytes);
    }

    /// Examine the upcoming characters and either commit to one structural
    /// token or decline.
    ///
    /// On commit the cursor's committed mark is at the end of the emitted
    /// token; Indent and Dedent are zero-width, so their mark stays at the
    /// rollback point and the host re-reads the leading whitespace on the
    /// next call. On decline the host restores the cursor to the rollback
    /// point and tries its other rules.
    pub fn scan<C: Cursor>(&mut self, cursor: &mut C, valid: ValidSymbols) -> Option<TokenKind> {
        cursor.mark_end();

        if valid.newline {
            if let Some(token) = self.scan_newline(cursor) {
                return Some(token);
            }
        }

        // Indentation is only decided at the start of a line; anywhere else
        // a whitespace run is the grammar's business.
        if cursor.column() > 0 {
            return None;
        }

        if !valid.indent && !valid.dedent {
            return None;
        }

        let indent_length = match self.measure_indentation(cursor) {
            Some(width) => width,
            None => {
                // Nothing but whitespace left: at end of input, close one
                // open level per call until the stack is drained.
                if valid.dedent && !self.stack.is_empty() {
                    self.stack.pop();
                    return Some(TokenKind::Dedent);
                }
                return None;
            }
        };

        let current_indent = self.stack.top();

        if indent_length > current_indent {
            if valid.indent {
                self.stack.push(indent_length);
                return Some(TokenKind::Indent);
            }
        } else if indent_length < current_indent && valid.dedent && !self.stack.is_empty() {
            // One level per invocation. If the new top is still above this
            // line's width the host calls again and we pop again.
            self.stack.pop();
            return Some(TokenKind::Dedent);
        }

        // Same width, or the kind this line calls for is not currently
        // acceptable: a deferred decision, not an error.
        None
    }

    /// Consume one logical line break and emit Newline, if the lookahead is
    /// a line terminator.
    fn scan_newline<C: Cursor>(&self, cursor: &mut C) -> Option<TokenKind> {
        match cursor.lookahead() {
            Some('\n') => {
                cursor.advance();
            }
            Some('\r') => {
                cursor.advance();
                if cursor.lookahead() == Some('\n') {
                    cursor.advance();
                }
            }
            _ => return None,
        }
        cursor.mark_end();
        Some(TokenKind::Newline)
    }

    /// Run the whitespace/line-skip loop: consume spaces, tabs, line
    /// terminators and comment-only lines until the first real content
    /// character of a line, and return that line's indentation width.
    /// Returns `None` when the input ends before any content.
    fn measure_indentation<C: Cursor>(&self, cursor: &mut C) -> Option<u32> {
        let mut indent_length: u32 = 0;

        loop {
            match cursor.lookahead() {
                Some(' ') => {
                    indent_length += 1;
                    cursor.advance();
                }
                Some('\t') => {
                    indent_length += self.config.tab_width;
                    cursor.advance();
                }
                Some('\n') => {
                    // Blank line: no structural token, no stack effect.
                    indent_length = 0;
                    cursor.advance();
                }
                Some('\r') => {
                    indent_length = 0;
                    cursor.advance();
                    if cursor.lookahead() == Some('\n') {
                        cursor.advance();
                    }
                }
                Some(c) if c == self.config.comment_marker => {
                    // Comment-only lines are blank for indentation
                    // purposes; the terminator that follows resets the
                    // counter.
                    while let Some(c) = cursor.lookahead() {
                        if c == '\n' || c == '\r' {
                            break;
                        }
                        cursor.advance();
                    }
                }
                Some(_) => return Some(indent_length),
                None => return None,
            }
        }
    }
}
