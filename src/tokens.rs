//! Structural token types produced by the indentation scanner
//!
//! The scanner synthesizes exactly three token kinds from whitespace layout:
//! Newline, Indent and Dedent. They play the role that explicit braces and
//! semicolons play in c-style syntaxes, so a downstream grammar can stay
//! context-free while the format itself stays whitespace-significant.
//!
//! The hosting grammar tells the scanner, per call, which of the three kinds
//! it would currently accept. That acceptability set is [`ValidSymbols`]; the
//! scanner never emits a kind absent from it.

use serde::Serialize;

/// A structural token synthesized from whitespace layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// One logical line break (`\n`, or `\r` optionally followed by `\n`).
    Newline,
    /// A new indentation level was opened by this line.
    Indent,
    /// One open indentation level was closed before this line (or at end of
    /// input). Closing several levels takes one scan call per level.
    Dedent,
}

/// The set of structural token kinds the caller currently accepts.
///
/// This mirrors the valid-symbol signal of the hosting tokenizer engine: the
/// grammar knows which tokens are syntactically possible at the current
/// position and the scanner must not commit to anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidSymbols {
    pub newline: bool,
    pub indent: bool,
    pub dedent: bool,
}

impl ValidSymbols {
    /// All three structural kinds are acceptable.
    pub fn all() -> Self {
        ValidSymbols {
            newline: true,
            indent: true,
            dedent: true,
        }
    }

    /// Only the indentation pair is acceptable; line breaks are left to the
    /// grammar. This is the shape used by grammars that treat newlines as
    /// ordinary extras rather than as an explicit token.
    pub fn indentation() -> Self {
        ValidSymbols {
            newline: false,
            indent: true,
            dedent: true,
        }
    }

    /// Nothing is acceptable. The scanner declines immediately.
    pub fn none() -> Self {
        ValidSymbols::default()
    }

    /// Whether the given kind is in the set.
    pub fn accepts(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Newline => self.newline,
            TokenKind::Indent => self.indent,
            TokenKind::Dedent => self.dedent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_accepts_every_kind() {
        let valid = ValidSymbols::all();
        assert!(valid.accepts(TokenKind::Newline));
        assert!(valid.accepts(TokenKind::Indent));
        assert!(valid.accepts(TokenKind::Dedent));
    }

    #[test]
    fn test_indentation_excludes_newline() {
        let valid = ValidSymbols::indentation();
        assert!(!valid.accepts(TokenKind::Newline));
        assert!(valid.accepts(TokenKind::Indent));
        assert!(valid.accepts(TokenKind::Dedent));
    }

    #[test]
    fn test_none_accepts_nothing() {
        let valid = ValidSymbols::none();
        assert!(!valid.accepts(TokenKind::Newline));
        assert!(!valid.accepts(TokenKind::Indent));
        assert!(!valid.accepts(TokenKind::Dedent));
    }
}
