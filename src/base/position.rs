/// Position tracking for model nodes
///
/// Stores the source location (file, byte offset, line/column) of declarations,
/// tokens and diagnostics. Lines and columns are 1-based, matching what C/C++
/// front ends report; an all-zero location means "unknown".
use std::fmt;

use smol_str::SmolStr;

/// A single point in a source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: SmolStr,
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

/// A range in source code. `end` points one past the last character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceLocation {
    pub fn new(file: impl Into<SmolStr>, offset: u32, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            offset,
            line,
            column,
        }
    }

    /// True when the front end could not attach a real position.
    pub fn is_unknown(&self) -> bool {
        self.line == 0
    }

    /// Same line and column, ignoring file and offset.
    pub fn same_line_col(&self, other: &SourceLocation) -> bool {
        self.line == other.line && self.column == other.column
    }
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        Self { start, end }
    }

    /// Check if a byte offset falls within this span (end exclusive)
    pub fn contains_offset(&self, offset: u32) -> bool {
        offset >= self.start.offset && offset < self.end.offset
    }

    /// Check if `other` lies fully inside this span
    pub fn encloses(&self, other: &SourceSpan) -> bool {
        other.start.offset >= self.start.offset && other.end.offset <= self.end.offset
    }

    pub fn len(&self) -> u32 {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", self.file, self.line, self.column)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {})-({}, {})",
            self.start.file, self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}
