//! # dent
//!
//! An indentation scanner for line-structured, whitespace-significant
//! formats.
//!
//! A context-free grammar alone cannot produce the three tokens an
//! indentation-sensitive syntax needs: Newline, Indent and Dedent. This
//! crate supplies the stateful piece that can: a scanner that tracks a
//! stack of open indentation widths across the input and resolves each
//! line's leading whitespace into at most one structural token per call.
//!
//! Structure:
//! 1. [`tokens`] - the structural token kinds and the caller-supplied
//!    valid-symbol set.
//! 2. [`cursor`] - the lookahead interface the scanner reads characters
//!    through, with explicit checkpoint/restore instead of destructive
//!    rollback.
//! 3. [`stack`] - the indent stack and its compact checkpoint format
//!    (count byte + one width byte per level).
//! 4. [`scanner`] - the scan state machine: one call commits to one token
//!    or declines.
//! 5. [`document`] - the host-side loop that scans whole sources into a
//!    structural token stream.
//!
//! Scanning is single-threaded and synchronous: one scanner per cursor,
//! driven strictly sequentially. The serialize/deserialize pair exists so
//! a host can checkpoint the stack at token boundaries and resume scanning
//! after an edit without replaying prior input.

pub mod cursor;
pub mod document;
pub mod scanner;
pub mod stack;
pub mod tokens;

pub use cursor::{Checkpoint, Cursor, StrCursor};
pub use document::{ensure_source_ends_with_newline, scan_document, scan_document_with};
pub use scanner::{Scanner, ScannerConfig};
pub use stack::{IndentStack, MAX_SERIALIZED_LEVELS, SERIALIZE_BUFFER_SIZE};
pub use tokens::{TokenKind, ValidSymbols};
