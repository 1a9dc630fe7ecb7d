//! Character cursor abstraction shared between the scanner and its host
//!
//! The scanner has no private copy of the source: it reads characters
//! through a cursor owned by the hosting tokenizer engine. [`Cursor`] is the
//! seam between the two. It exposes exactly what the scanner needs:
//! one-character lookahead, advancing, the current column, and `mark_end`
//! style checkpointing of the committed token boundary.
//!
//! Rollback is explicit. Instead of saving and restoring the cursor by
//! bitwise struct copy, [`StrCursor`] hands out an opaque [`Checkpoint`]
//! that the host restores when a scan declines. The committed mark set by
//! `mark_end` is itself a checkpoint, so "resume at the end of the emitted
//! token" and "roll back to where the scan started" are the same operation.

use std::ops::Range;

/// Lookahead interface the scanner consumes characters through.
///
/// Implementations track the column themselves: the column is the number of
/// characters since the last line terminator, so it is 0 exactly at the
/// start of a line.
pub trait Cursor {
    /// The next character, without consuming it. `None` at end of input.
    fn lookahead(&self) -> Option<char>;

    /// Consume the lookahead character.
    fn advance(&mut self);

    /// Record the current position as the committed end of the token being
    /// scanned. Characters consumed after the last `mark_end` are lookahead
    /// only and are not part of any emitted token.
    fn mark_end(&mut self);

    /// Characters since the start of the current line.
    fn column(&self) -> u32;
}

/// A saved cursor position that can later be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos: usize,
    column: u32,
}

impl Checkpoint {
    /// Byte offset into the source this checkpoint refers to.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

/// In-memory [`Cursor`] over a source string.
///
/// This is the implementation used by the document driver and the tests; an
/// embedding engine with its own input representation supplies its own
/// `Cursor` instead.
#[derive(Debug)]
pub struct StrCursor<'a> {
    source: &'a str,
    pos: usize,
    column: u32,
    mark: Checkpoint,
}

impl<'a> StrCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        StrCursor {
            source,
            pos: 0,
            column: 0,
            mark: Checkpoint { pos: 0, column: 0 },
        }
    }

    /// Snapshot the current position.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            column: self.column,
        }
    }

    /// Return to a previously saved position.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.column = checkpoint.column;
    }

    /// The committed token boundary recorded by the last `mark_end`.
    pub fn mark(&self) -> Checkpoint {
        self.mark
    }

    /// Current byte offset into the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The byte range between a checkpoint and the committed mark, i.e. the
    /// extent of the token a successful scan just emitted.
    pub fn committed_range(&self, start: Checkpoint) -> Range<usize> {
        start.pos..self.mark.pos
    }
}

impl Cursor for StrCursor<'_> {
    fn lookahead(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.lookahead() {
            self.pos += c.len_utf8();
            if c == '\n' || c == '\r' {
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    fn mark_end(&mut self) {
        self.mark = self.checkpoint();
    }

    fn column(&self) -> u32 {
        self.column
    }
}
