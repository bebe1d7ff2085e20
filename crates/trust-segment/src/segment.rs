//! Inclusive 1-based line ranges.

use std::fmt;

/// An inclusive range of 1-based source lines.
///
/// `start_line == end_line + 1` denotes an empty range positioned before
/// `start_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSegment {
    /// First line of the range.
    pub start_line: u32,
    /// Last line of the range (inclusive).
    pub end_line: u32,
}

impl LineSegment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start_line: u32, end_line: u32) -> Self {
        debug_assert!(start_line <= end_line + 1, "{start_line}..={end_line}");
        Self {
            start_line,
            end_line,
        }
    }

    /// Returns the same segment ending on `end_line`.
    #[must_use]
    pub fn with_end(self, end_line: u32) -> Self {
        Self::new(self.start_line, end_line)
    }

    /// Returns `true` if the segment covers no line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end_line < self.start_line
    }

    /// Number of lines covered.
    #[must_use]
    pub fn len(&self) -> usize {
        (self.end_line + 1).saturating_sub(self.start_line) as usize
    }

    /// Slices `lines` (index 0 holds line 1), clamped to the available lines.
    #[must_use]
    pub fn lines<'a, 'src>(&self, lines: &'a [&'src str]) -> &'a [&'src str] {
        let start = (self.start_line.max(1) - 1) as usize;
        let end = (self.end_line as usize).min(lines.len());
        lines.get(start..end).unwrap_or_default()
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start_line, self.end_line)
    }
}
