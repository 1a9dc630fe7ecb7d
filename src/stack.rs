//! The indent stack: the scanner's entire persistent state
//!
//! Each entry is the column width at which one currently-open indentation
//! level was opened. The sequence is strictly increasing bottom-to-top; the
//! implicit top level of width 0 is never materialized, [`IndentStack::top`]
//! simply reports 0 when the stack is empty.
//!
//! Checkpoint format
//!
//!     The stack externalizes to a compact byte form so the host can
//!     checkpoint scanning state across edits and resume without replaying
//!     prior input: byte 0 holds the level count, bytes 1..=n hold one width
//!     each. A width is a single byte, so levels wider than 255 columns are
//!     capped at 255 when written. A stack deeper than the buffer allows is
//!     truncated to the levels that fit, and the count byte reflects the
//!     truncated count. Both boundaries are deliberate, documented and
//!     tested rather than left to buffer overrun.

/// Size of the canonical checkpoint buffer.
pub const SERIALIZE_BUFFER_SIZE: usize = 256;

/// Maximum number of levels a checkpoint can carry: one byte goes to the
/// count, and the count itself is a single byte.
pub const MAX_SERIALIZED_LEVELS: usize = SERIALIZE_BUFFER_SIZE - 1;

/// Ordered set of open indentation widths, strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndentStack {
    levels: Vec<u32>,
}

impl IndentStack {
    /// A stack with only the implicit zero level open.
    pub fn new() -> Self {
        IndentStack::default()
    }

    /// Width of the innermost open level, or 0 when only the implicit top
    /// level is open.
    pub fn top(&self) -> u32 {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Open a new level. Callers only push widths greater than the current
    /// top, which is what keeps the stack strictly increasing.
    pub fn push(&mut self, width: u32) {
        debug_assert!(
            width > self.top(),
            "indent levels must be strictly increasing"
        );
        self.levels.push(width);
    }

    /// Close the innermost open level.
    pub fn pop(&mut self) -> Option<u32> {
        self.levels.pop()
    }

    /// Number of explicitly open levels (the implicit zero level is not
    /// counted).
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// The open widths, bottom to top.
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    /// Write the checkpoint form into `buffer`, returning the number of
    /// bytes written. Never writes past the buffer: levels that do not fit
    /// are dropped from the checkpoint (deep nesting is lossy by design).
    pub fn serialize(&self, buffer: &mut [u8]) -> usize {
        if buffer.is_empty() {
            return 0;
        }

        let fit = self
            .levels
            .len()
            .min(buffer.len() - 1)
            .min(MAX_SERIALIZED_LEVELS);

        buffer[0] = fit as u8;
        for (slot, width) in buffer[1..=fit].iter_mut().zip(&self.levels) {
            // Widths above 255 are capped, not wrapped.
            *slot = u8::try_from(*width).unwrap_or(u8::MAX);
        }

        1 + fit
    }

    /// Replace the stack with the checkpoint in `bytes`. An empty buffer
    /// yields an empty stack. Input shorter than its own count byte claims
    /// degrades to the widths actually present.
    pub fn deserialize(&mut self, bytes: &[u8]) {
        self.levels.clear();

        let Some((&count, widths)) = bytes.split_first() else {
            return;
        };

        self.levels
            .extend(widths.iter().take(count as usize).map(|&b| u32::from(b)));
    }
}
